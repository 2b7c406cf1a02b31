//! Pipeline template rendering
//!
//! Templates are plain Groovy pipeline scripts carrying literal placeholder
//! tokens. Rendering swaps each token for the matching [`JobParameters`]
//! field and leaves everything else untouched.

use crate::domain::job::JobParameters;

pub const PRODUCT_NAME: &str = "{{PRODUCT_NAME}}";
pub const GIT_REPO: &str = "{{GIT_REPO}}";
pub const GIT_BRANCH: &str = "{{GIT_BRANCH}}";
pub const HELM_DEPLOY: &str = "{{HELM_DEPLOY}}";

/// Render a template by substituting every placeholder token
///
/// The scan is single-pass: text inserted from a parameter is never
/// rescanned, so a value that itself looks like a token lands verbatim.
/// Unknown `{{...}}` sequences are copied through unchanged. No escaping
/// is applied.
///
/// # Example
/// ```
/// use mrtux_core::domain::job::JobParameters;
/// use mrtux_core::template::render;
///
/// let params = JobParameters {
///     product_name: "svc-a".to_string(),
///     git_repo: "http://git/x.git".to_string(),
///     git_branch: "main".to_string(),
///     helm_deploy: String::new(),
/// };
/// let out = render("app={{PRODUCT_NAME}} repo={{GIT_REPO}}", &params);
/// assert_eq!(out, "app=svc-a repo=http://git/x.git");
/// ```
pub fn render(template: &str, params: &JobParameters) -> String {
    let substitutions = [
        (PRODUCT_NAME, params.product_name.as_str()),
        (GIT_REPO, params.git_repo.as_str()),
        (GIT_BRANCH, params.git_branch.as_str()),
        (HELM_DEPLOY, params.helm_deploy.as_str()),
    ];

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match substitutions
            .iter()
            .find(|(token, _)| candidate.starts_with(token))
        {
            Some((token, value)) => {
                output.push_str(value);
                rest = &candidate[token.len()..];
            }
            None => {
                output.push('{');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}
