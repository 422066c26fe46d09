mod common;

use common::{corpus, embedder, DIM};

fn l2_norm(v: &[f32]) -> f64 {
    v.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt()
}

#[tokio::test]
async fn embed_returns_one_vector_per_text_in_order() {
    let e = embedder();
    let texts: Vec<String> = (0..5).map(|i| format!("text number {i}")).collect();
    let vectors = e.embed(&texts, true).await.unwrap();
    assert_eq!(vectors.len(), texts.len());

    // Each text embedded alone must match its batch position.
    for (i, text) in texts.iter().enumerate() {
        let single = e.embed(std::slice::from_ref(text), true).await.unwrap();
        assert_eq!(single[0], vectors[i], "order broken at position {i}");
    }
}

#[tokio::test]
async fn normalized_vectors_have_unit_norm() {
    let e = embedder();
    let vectors = e.embed(&corpus(), true).await.unwrap();
    assert_eq!(vectors.len(), 2);
    for v in &vectors {
        let norm = l2_norm(v);
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }
}

#[tokio::test]
async fn unnormalized_vectors_are_left_raw() {
    let e = embedder();
    let raw = e.embed(&corpus(), false).await.unwrap();
    // Hashed vectors are effectively never unit-length before scaling.
    assert!(raw.iter().any(|v| (l2_norm(v) - 1.0).abs() > 1e-3));
}

#[tokio::test]
async fn dimension_is_constant_across_calls() {
    let e = embedder();
    assert_eq!(e.dimension(), DIM);
    let a = e.embed(&["short".to_string()], true).await.unwrap();
    let b = e
        .embed(&["a considerably longer input sentence".to_string()], true)
        .await
        .unwrap();
    assert_eq!(a[0].len(), DIM);
    assert_eq!(b[0].len(), DIM);
}

#[tokio::test]
async fn equal_texts_embed_equally() {
    let e = embedder();
    let vectors = e
        .embed(&["same text".to_string(), "same text".to_string()], true)
        .await
        .unwrap();
    assert_eq!(vectors[0], vectors[1]);
}
