pub const TOURNAMENT_SYSTEM_PROMPT: &str = "You are a tournament planning assistant that creates detailed web design competitions for university students.";

pub const DEFAULT_TOURNAMENT_DESCRIPTION: &str = "A web design competition for university students where they need to redesign a website for a fictitious cat company.";

/// Placeholders: `{description}`, `{schema}`.
pub const TOURNAMENT_GENERATION_PROMPT: &str = "Generate detailed information for a web design tournament for university students based on the following description:
{description}

The tournament should be for a fictitious cat company called \"Purr-fect Designs\" that wants to redesign their website.

Please provide the following details in a structured format:
1. Title (creative and engaging)
2. Description (detailed, include the company background and what they're looking for)
3. Date and Time (a future date)
4. Location (both virtual and a physical location at a university)
5. Eligibility requirements (who can participate)
6. Minimum rank required (choose from: Unranked, Bronze, Silver, Gold, Master, Grand Master, One Above All)
7. Team size (between 1-4)
8. Submission deadline (before the tournament date)
9. Tournament rules (detailed)
10. Judging criteria (be specific about design, usability, creativity, etc.)
11. Project submission guidelines (what needs to be submitted and how)
12. List of judges (3-5 judges with name and role)

Format the response as a single JSON object to be easily parsed. It should match this JSON schema:
{schema}";

/// Companies the non-AI web design template picks from.
pub const CAT_COMPANIES: [&str; 9] = [
    "Purr-fect Designs",
    "Whisker Web Solutions",
    "Meow Marketing",
    "Feline Frameworks",
    "Cat-alog Designs",
    "The Furry Site Co.",
    "Paws & Pixels",
    "9Lives Digital",
    "CatNip Creative",
];
