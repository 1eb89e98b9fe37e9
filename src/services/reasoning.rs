use async_trait::async_trait;
use rig::completion::Prompt;
use rig::providers::openai;

/// A single-shot "rate this decision" call. Returns `None` on timeout, parse
/// failure, or when disabled — the causal fan-out treats `None` as a
/// fallback signal, never as an error.
#[async_trait]
pub trait ReasoningService: Send + Sync {
    async fn rate(&self, prompt: &str) -> Option<f64>;
}

#[derive(Debug, Default, Clone)]
pub struct DisabledReasoningService;

#[async_trait]
impl ReasoningService for DisabledReasoningService {
    async fn rate(&self, _prompt: &str) -> Option<f64> {
        None
    }
}

/// `rig-core`-backed implementation, provider-agnostic behind the crate's
/// own multi-provider client abstraction.
pub struct RigReasoningService {
    model: String,
    client: openai::Client,
}

impl RigReasoningService {
    pub fn new(client: openai::Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ReasoningService for RigReasoningService {
    async fn rate(&self, prompt: &str) -> Option<f64> {
        let agent = self.client.agent(&self.model).build();
        match agent.prompt(prompt).await {
            Ok(text) => parse_scalar(&text),
            Err(e) => {
                tracing::warn!(error = %e, "reasoning service call failed");
                None
            }
        }
    }
}

/// Extract the first floating point number in the text and clamp it into
/// [0, 1]. Real providers occasionally answer with a bare `1` instead of
/// `1.0`; both parse fine here.
fn parse_scalar(text: &str) -> Option<f64> {
    let mut chars = text.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() || c == '.' {
            let mut end = start + c.len_utf8();
            while let Some(&(_, c2)) = chars.peek() {
                if c2.is_ascii_digit() || c2 == '.' {
                    end += c2.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            if let Ok(v) = text[start..end].parse::<f64>() {
                return Some(v.clamp(0.0, 1.0));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal() {
        assert_eq!(parse_scalar("0.73"), Some(0.73));
    }

    #[test]
    fn clamps_out_of_range_scalar() {
        assert_eq!(parse_scalar("the score is 1"), Some(1.0));
        assert_eq!(parse_scalar("rating: 2.4 out of 1"), Some(1.0));
    }

    #[test]
    fn no_number_returns_none() {
        assert_eq!(parse_scalar("not sure"), None);
    }
}
