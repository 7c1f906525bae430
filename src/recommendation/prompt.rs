//! Prompt template for event recommendations.

use super::request::RecommendationRequest;

/// System message sent with every recommendation prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are an event-recommendation assistant. \
Reply with a JSON object of the form {\"recommendations\": \"...\"} where the value \
is plain text with one recommendation per line.";

/// A rendered prompt ready to send to a [`super::LanguageModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Instruction describing the reply format.
    pub system: String,
    /// Template with the request fields substituted.
    pub user: String,
}

/// Substitutes the request fields into the recommendation template.
#[must_use]
pub fn render_prompt(request: &RecommendationRequest) -> Prompt {
    let user = format!(
        "You are an AI assistant that provides personalized event recommendations to users.\n\
         Based on the user's profile, past bookings, and preferences, generate a list of events that the user might be interested in.\n\
         \n\
         User Profile: {profile}\n\
         Past Bookings: {bookings}\n\
         Preferences: {preferences}\n\
         \n\
         Recommendations:",
        profile = request.user_profile(),
        bookings = request.past_bookings(),
        preferences = request.preferences(),
    );
    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_three_fields() {
        let Ok(request) = RecommendationRequest::new(
            "likes hiking",
            "Indie Music Fest",
            "live jazz music in a cozy venue",
        ) else {
            panic!("valid request");
        };
        let prompt = render_prompt(&request);
        assert!(prompt.user.contains("User Profile: likes hiking\n"));
        assert!(prompt.user.contains("Past Bookings: Indie Music Fest\n"));
        assert!(prompt.user.contains("Preferences: live jazz music in a cozy venue\n"));
        assert!(prompt.user.ends_with("Recommendations:"));
        assert!(prompt.user.starts_with("You are an AI assistant"));
    }

    #[test]
    fn system_instruction_names_the_reply_shape() {
        assert!(SYSTEM_INSTRUCTION.contains("\"recommendations\""));
    }
}
