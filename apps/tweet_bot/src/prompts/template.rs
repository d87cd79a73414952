use crate::core::error::TemplateError;

/// A fixed prompt with `{name}` placeholders.
///
/// Values are substituted in a single pass and inserted literally, so a value
/// that itself contains `{...}` is never expanded. `{{` and `}}` produce
/// literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: &'static str,
    input_variables: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(template: &'static str, input_variables: &'static [&'static str]) -> Self {
        Self {
            template,
            input_variables,
        }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn input_variables(&self) -> &'static [&'static str] {
        self.input_variables
    }

    pub fn format(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        let template = self.template;
        let mut output = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            match ch {
                '{' => {
                    if chars.next_if(|&(_, c)| c == '{').is_some() {
                        output.push('{');
                        continue;
                    }
                    let start = idx + 1;
                    let end = template[start..]
                        .find('}')
                        .map(|offset| start + offset)
                        .ok_or(TemplateError::Unclosed(idx))?;
                    let name = &template[start..end];
                    let value = values
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| TemplateError::MissingVariable(name.to_string()))?;
                    output.push_str(value);
                    while chars.next_if(|&(i, _)| i <= end).is_some() {}
                }
                '}' => {
                    if chars.next_if(|&(_, c)| c == '}').is_none() {
                        return Err(TemplateError::UnmatchedClose(idx));
                    }
                    output.push('}');
                }
                _ => output.push(ch),
            }
        }

        Ok(output)
    }
}
