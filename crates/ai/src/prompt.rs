//! Fixed-structure prompt for wholesale inquiry emails.

/// Business the inquiry is addressed to.
pub const TARGET_BUSINESS: &str = "HANUMANTAY (Wholesale Hankies & Scarves)";

/// Word cap requested from the model.
pub const MAX_WORDS: usize = 150;

/// Prompt inputs supplied by the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquiryPrompt<'a> {
    pub business_name: &'a str,
    pub requirements: &'a str,
}

impl<'a> InquiryPrompt<'a> {
    pub fn new(business_name: &'a str, requirements: &'a str) -> Self {
        Self {
            business_name,
            requirements,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "You are a professional business assistant for a wholesale buyer.\n\
             Write a polite, concise, and professional wholesale inquiry email draft.\n\
             \n\
             Sender Business Name: {business}\n\
             Target Business: {target}\n\
             User Requirements/Keywords: {requirements}\n\
             \n\
             The email should ask about bulk pricing, minimum order quantities (MOQ), and shipping to their location.\n\
             Keep it under {words} words.",
            business = self.business_name.trim(),
            target = TARGET_BUSINESS,
            requirements = self.requirements.trim(),
            words = MAX_WORDS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_inputs_and_fixed_instructions() {
        let prompt = InquiryPrompt::new("  Acme Traders ", "200 silk scarves monthly").render();

        assert!(prompt.contains("Sender Business Name: Acme Traders\n"));
        assert!(prompt.contains("User Requirements/Keywords: 200 silk scarves monthly"));
        assert!(prompt.contains(TARGET_BUSINESS));
        assert!(prompt.contains("bulk pricing"));
        assert!(prompt.contains("minimum order quantities (MOQ)"));
        assert!(prompt.contains("shipping"));
        assert!(prompt.ends_with("Keep it under 150 words."));
    }

    #[test]
    fn empty_inputs_still_render_the_template() {
        let prompt = InquiryPrompt::new("", "").render();
        assert!(prompt.starts_with("You are a professional business assistant"));
        assert!(prompt.contains("Sender Business Name: \n"));
    }
}
