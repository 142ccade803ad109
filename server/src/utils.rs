use gemini_response::UsageMetadata;
use tracing::info;

pub fn usage_callback(usage: &UsageMetadata) {
    let mut msg = format!(
        "Usage: prompt_tokens: {}, candidates_tokens: {}, total_tokens: {}",
        usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
    );
    if let Some(t) = usage.cached_content_token_count {
        msg.push_str(&format!(", cached_content_tokens: {}", t));
    }
    info!("{}", msg);
}
