pub const QUESTION_SYSTEM_PROMPT: &str = "You are an educational assistant that creates accurate multiple-choice questions based on lecture content.";

pub const QUESTIONS_PER_SET: u32 = 10;

/// Placeholders: `{count}`, `{difficulty}`, `{content}`.
pub const QUESTION_GENERATION_PROMPT: &str = "Based on the following lecture slide content, generate {count} multiple-choice questions at a {difficulty} difficulty level.
Each question should have 4 options (A, B, C, D) with only one correct answer.
For each question, also provide:
1. The correct answer letter
2. A brief explanation for why that answer is correct

Format each question as follows:
Question 1: [Question text]
Options: A: [Option A], B: [Option B], C: [Option C], D: [Option D]
Answer: [Correct answer letter]
Reason: [Explanation]

Only use information explicitly stated in the content. Do not make up information.

Content:
{content}";
