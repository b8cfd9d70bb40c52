use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::Form;

pub fn run(form: &mut Form, text: &str) -> Result<CmdResult> {
    form.change_title(text);
    Ok(CmdResult::default().with_suggestions(form.suggestions.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_from_the_catalog() {
        let mut form = Form::new();
        let result = run(&mut form, "vo").unwrap();
        assert!(result
            .suggestions
            .iter()
            .any(|w| w.title == "Volver al Futuro"));
    }

    #[test]
    fn single_character_queries_suggest_nothing() {
        let mut form = Form::new();
        let result = run(&mut form, "v").unwrap();
        assert!(result.suggestions.is_empty());
    }
}
