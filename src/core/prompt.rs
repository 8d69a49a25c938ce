use crate::domain::model::ComparisonRequest;
use crate::domain::ports::GenerationRequest;
use crate::domain::schema::comparison_schema;

pub const SYSTEM_INSTRUCTION: &str = "You are an impartial analyst who specializes in comparisons. \
Your task is to analyze the two options provided by the user, list the pros and cons of each one \
concisely as bullet points, and finish with a balanced conclusion. \
Clearly identify and name each option in your answer.";

pub fn build_prompt(request: &ComparisonRequest) -> String {
    format!(
        "Compare the following two options in detail:\n\nOption A: \"{}\"\n\nOption B: \"{}\"",
        request.option_a, request.option_b
    )
}

pub fn generation_request(request: &ComparisonRequest) -> GenerationRequest {
    GenerationRequest {
        prompt: build_prompt(request),
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        response_schema: comparison_schema(),
    }
}
