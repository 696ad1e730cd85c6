/// Suffix identifying post files. Matched case-sensitively.
pub const POST_EXTENSION: &str = ".md";

/// Whether a file name should be picked up as a post
pub fn is_post_filename(filename: &str) -> bool {
    filename.ends_with(POST_EXTENSION)
}

/// Derive a post id by removing the trailing `.md` from its file name
///
/// # Examples
///
/// ```
/// use blog_registry::utils::post_id_from_filename;
///
/// assert_eq!(post_id_from_filename("3.md"), "3");
/// assert_eq!(post_id_from_filename("notes.md.md"), "notes.md");
/// ```
pub fn post_id_from_filename(filename: &str) -> &str {
    filename.strip_suffix(POST_EXTENSION).unwrap_or(filename)
}
