use std::sync::LazyLock;

use regex::Regex;

/// Region used when the context hint carries no region token.
pub const DEFAULT_REGION: &str = "us-east-1";

static LAMBDA_ARN_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"arn:aws[a-z-]*:lambda:([^:]+):").expect("lambda ARN pattern is valid")
});

/// Derive the AWS region from an execution-context hint.
///
/// The hint is normally the invoked function ARN
/// (`arn:aws:lambda:us-west-2:123456789012:function:chat`). The region is the
/// fourth colon-delimited field; anything unrecognized yields
/// [`DEFAULT_REGION`].
pub fn region_from_context(context_hint: &str) -> String {
    LAMBDA_ARN_REGION
        .captures(context_hint)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}
