// Cross-cutting prompt fragments. Task prompts live next to the code that
// sends them (see summary::prompts).

/// Persona for every summarization call.
pub const TECHNICAL_TRANSLATOR_SYSTEM: &str = "You are an expert technical translator \
    who explains complex projects to non-technical audiences.";
