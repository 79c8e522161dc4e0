pub mod gemini_client_http;

pub use gemini_client_http::HttpGeminiClient;
