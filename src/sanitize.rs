//! Cleanup of raw completion text into renderable Mermaid source.
//!
//! Models tend to wrap their answer in a Markdown code block even when told not to. Only the
//! exact `` ```mermaid `` opener and the bare `` ``` `` fence are stripped; other language tags
//! or casings are left untouched so malformed output stays visible.

/// Opening fence with the Mermaid language tag.
const MERMAID_FENCE: &str = "```mermaid";
/// Bare fence, used both as a closer and as an untagged opener.
const FENCE: &str = "```";

/// Removes every Mermaid fence and bare fence from `raw`, then trims surrounding whitespace.
///
/// The result never contains `` ``` ``, so applying it twice is the same as applying it once.
pub fn sanitize(raw: &str) -> String {
	raw.replace(MERMAID_FENCE, "").replace(FENCE, "").trim().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_mermaid_fence() {
		assert_eq!(sanitize("```mermaid\ngraph TD\nA-->B\n```"), "graph TD\nA-->B");
	}

	#[test]
	fn strips_bare_fence() {
		assert_eq!(sanitize("```\nclassDiagram\nclass User\n```\n"), "classDiagram\nclass User");
	}

	#[test]
	fn fence_free_input_is_only_trimmed() {
		let raw = "  \nsequenceDiagram\nA->>B: hi\n\n";
		assert_eq!(sanitize(raw), "sequenceDiagram\nA->>B: hi");
		assert_eq!(sanitize(raw.trim()), sanitize(raw));
	}

	#[test]
	fn is_idempotent() {
		let inputs = [
			"```mermaid\ngraph LR\nA-->B\n```",
			"``````mermaidmermaid",
			"`````mermaid`",
			"````",
			"text ``` in ```mermaid the middle",
			"   ",
			"",
		];

		for input in inputs {
			let once = sanitize(input);
			assert_eq!(sanitize(&once), once, "not idempotent for {:?}", input);
			assert!(!once.contains(FENCE));
		}
	}

	#[test]
	fn other_language_tags_are_left_behind() {
		assert_eq!(sanitize("```Mermaid\ngraph TD\n```"), "Mermaid\ngraph TD");
		assert_eq!(sanitize("```text\nhello\n```"), "text\nhello");
	}

	#[test]
	fn diagram_content_is_preserved() {
		let raw = "graph TD\n  A[`quoted`] -->|yes| B{{hex}}";
		assert_eq!(sanitize(raw), raw);
	}
}
