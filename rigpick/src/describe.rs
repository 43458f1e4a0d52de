use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::common::Client;
use rigpick_core::{Build, BuildSpec};

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str = "You are a PC building assistant.";

/*
 * Turns a finalized build into prose via an OpenAI-compatible chat
 * endpoint. The wording of the reply is the model's business; nothing
 * downstream parses it.
 */
pub struct Describer {
    api_key: String,
    model: String,
    base_url: String,
    client: Client<false>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<OutMessage<'a>>,
}

#[derive(Serialize)]
struct OutMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: InMessage,
}

#[derive(Deserialize)]
struct InMessage {
    content: String,
}

impl Describer {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Default::default(),
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn prompt(build: &Build, spec: &BuildSpec) -> String {
        let parts = build
            .components()
            .map(|c| format!("{}: {} - £{:.2}", c.category, c.name, c.price))
            .collect::<Vec<_>>()
            .join("\n");

        let mut notes = Vec::new();
        if spec.include_os {
            notes.push("The build includes an operating system.".to_string());
        }
        if !spec.peripherals.is_empty() {
            notes.push(format!(
                "Requested peripherals: {}.",
                spec.peripherals.join(", ")
            ));
        }

        format!(
            "You are a PC building expert. Write a short description of the following PC build, \
             chosen for {} within a budget of £{:.2}. \
             Explain briefly why the parts suit that use.\n\
             Selected components:\n{}\nTotal cost: £{:.2}\n{}",
            spec.purpose,
            spec.budget,
            parts,
            build.total_price,
            notes.join("\n")
        )
    }

    /// Ask the model for a description of `build`.
    ///
    /// # Errors
    /// Errors if the request failed, or if the response carried no choices.
    pub async fn describe(&self, build: &Build, spec: &BuildSpec) -> anyhow::Result<String> {
        let prompt = Self::prompt(build, spec);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                OutMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                OutMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        let res = self
            .client
            .0
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let parsed: ChatResponse = res.json().await.context("decoding description response")?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("empty description response")?;
        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Describer;
    use rigpick_core::{Build, BuildSpec, Component};

    fn build() -> Build {
        let required: Vec<Component> = serde_json::from_str(
            r#"[
                {"type": "CPU", "name": "Test CPU", "price": 180},
                {"type": "GPU", "name": "Test GPU", "price": 400}
            ]"#,
        )
        .unwrap();
        Build {
            required,
            optional: Vec::new(),
            score: 514.0,
            total_price: 1010.0,
        }
    }

    #[test]
    fn test_prompt_lists_parts_and_total() {
        let spec = BuildSpec {
            budget: 1200.0,
            purpose: "gaming".to_string(),
            include_os: false,
            peripherals: Vec::new(),
        };
        let prompt = Describer::prompt(&build(), &spec);
        assert!(prompt.contains("CPU: Test CPU - £180.00"));
        assert!(prompt.contains("GPU: Test GPU - £400.00"));
        assert!(prompt.contains("Total cost: £1010.00"));
        assert!(prompt.contains("chosen for gaming"));
        assert!(!prompt.contains("operating system"));
    }

    #[test]
    fn test_prompt_carries_extra_requirements() {
        let spec = BuildSpec {
            budget: 1200.0,
            purpose: "gaming".to_string(),
            include_os: true,
            peripherals: vec!["keyboard".to_string(), "mouse".to_string()],
        };
        let prompt = Describer::prompt(&build(), &spec);
        assert!(prompt.contains("The build includes an operating system."));
        assert!(prompt.contains("Requested peripherals: keyboard, mouse."));
    }
}
