pub mod ranked_result;
