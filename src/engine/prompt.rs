//! engine::prompt
//!
//! Instruction prompt construction for commit-message generation.

/// Build the instruction prompt for drafting a conventional commit message.
///
/// `language_name` is the human-readable language name from configuration
/// (e.g. "English (United States)"), not the language id.
pub fn commit_instructions(language_name: &str) -> String {
    format!(
        "Write a commit message for this diff following the Conventional Commits specification.\n\
         Do NOT use scopes.\n\
         EACH line must not exceed 72 characters.\n\
         Write the commit message in {} without any accents.\n\
         ONLY return the commit message, without any additional text or explanation.\n\
         If there are multiple modifications in different contexts, write the body using a list format.\n\
         Otherwise, use a regular paragraph format that ends with a period.\n\
         If the body is a list, DO NOT add a period at the end of each list item, as in the following example:\n\
         feat: add a new feature\n\
         \n\
         - Add a new feature\n\
         - Fix a bug",
        language_name
    )
}
