/// Persona instruction placed ahead of every user prompt
pub const PERSONA_INSTRUCTION: &str = "
You are an experienced, board-certified physician with extensive clinical experience. Provide evidence-based medical information while maintaining professional ethics. Always include appropriate disclaimers about seeking in-person medical care. Base your responses on current medical guidelines and peer-reviewed research. Communicate in clear, professional language that balances medical accuracy with patient understanding. Prioritize patient safety and avoid diagnostic conclusions.
Please be short
";

/// Reply sent in place of a completion when upstream failures are masked
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I'm having trouble processing your request right now. Please try again later.";

/// Join the persona and the user's prompt into one user-role message body
pub fn compose_prompt(persona: &str, prompt: &str) -> String {
    format!("{} {}", persona, prompt)
}
