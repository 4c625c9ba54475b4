//! Prompt construction for diagram generation.

use crate::types::DiagramType;

/// Short syntax hints so the model picks the right Mermaid header for each diagram type.
const GUIDELINES: &str = "Guidelines:
- For flowcharts: use 'graph TD' or 'graph LR'
- For sequence: use 'sequenceDiagram'
- For class: use 'classDiagram'
- Keep it clear and concise
";

/// Builds the completion prompt asking for a Mermaid `diagram_type` diagram of `description`.
///
/// The description is trusted user input and is embedded verbatim. The output is fully
/// determined by the inputs.
pub fn build_prompt(description: &str, diagram_type: DiagramType) -> String {
	format!(
		"Convert this description into a Mermaid {} diagram.
Return ONLY the Mermaid code, no explanations.

Description: {}

{}",
		diagram_type, description, GUIDELINES
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embeds_description_and_type_verbatim() {
		let descriptions = ["", "a -> b", "Quotes \"and\" {braces} <tags> & stuff", "多言語"];

		for description in descriptions {
			for diagram_type in DiagramType::ALL {
				let prompt = build_prompt(description, diagram_type);
				assert!(prompt.contains(&format!("Description: {}\n", description)));
				assert!(prompt.contains(diagram_type.label()));
				assert!(prompt
					.contains(&format!("Convert this description into a Mermaid {} diagram.", diagram_type)));
			}
		}
	}

	#[test]
	fn asks_for_code_only_with_guidelines() {
		let prompt = build_prompt("anything", DiagramType::Class);
		assert!(prompt.contains("Return ONLY the Mermaid code, no explanations."));
		assert!(prompt.contains("'graph TD' or 'graph LR'"));
		assert!(prompt.contains("'sequenceDiagram'"));
		assert!(prompt.contains("'classDiagram'"));
	}

	#[test]
	fn is_deterministic() {
		assert_eq!(
			build_prompt("login flow", DiagramType::Sequence),
			build_prompt("login flow", DiagramType::Sequence)
		);
	}
}
