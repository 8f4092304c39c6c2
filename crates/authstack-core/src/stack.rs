//! Languages, frameworks and the stack key derived from them

use std::fmt;

/// Supported project languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    /// Lowercase token used in template directory names
    pub fn token(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    /// Whether templates exist for this language yet
    pub fn is_available(&self) -> bool {
        matches!(self, Language::JavaScript)
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.token() == token)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported frontend frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Vue,
    Angular,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Vue, Framework::Angular];

    pub fn token(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Framework::React)
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token() == token)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Filter key combining a framework and a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackKey {
    pub framework: Framework,
    pub language: Language,
}

impl StackKey {
    pub fn new(framework: Framework, language: Language) -> Self {
        Self {
            framework,
            language,
        }
    }

    /// `{framework}_{language}`
    pub fn key(&self) -> String {
        format!("{}_{}", self.framework.token(), self.language.token())
    }

    /// `{framework}_`, the prefix template directories are matched against
    pub fn prefix(&self) -> String {
        format!("{}_", self.framework.token())
    }
}

impl fmt::Display for StackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_key_and_prefix() {
        let stack = StackKey::new(Framework::React, Language::JavaScript);
        assert_eq!(stack.key(), "react_javascript");
        assert_eq!(stack.prefix(), "react_");
        assert_eq!(stack.to_string(), "react_javascript");
    }

    #[test]
    fn test_tokens_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_token(lang.token()), Some(lang));
        }
        for fw in Framework::ALL {
            assert_eq!(Framework::from_token(fw.token()), Some(fw));
        }
        assert_eq!(Language::from_token("cobol"), None);
    }

    #[test]
    fn test_availability() {
        assert!(Language::JavaScript.is_available());
        assert!(!Language::TypeScript.is_available());
        assert!(Framework::React.is_available());
        assert!(!Framework::Vue.is_available());
        assert!(!Framework::Angular.is_available());
    }
}
