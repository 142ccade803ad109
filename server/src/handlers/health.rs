pub const GREETING: &str = "Hello World Gemini!";

pub async fn hello() -> &'static str {
    GREETING
}
