//! Language tag to execution-environment mapping

use crate::constants::{language_ids, languages};

/// Map a language tag to the judge's language id
///
/// Unknown tags fall back to [`language_ids::FALLBACK`] so a submission
/// with a bad tag still executes instead of erroring out.
pub fn judge_language_id(language: &str) -> i64 {
    match language {
        languages::JAVASCRIPT => language_ids::JAVASCRIPT,
        languages::PYTHON => language_ids::PYTHON,
        languages::JAVA => language_ids::JAVA,
        languages::CPP => language_ids::CPP,
        languages::C => language_ids::C,
        _ => language_ids::FALLBACK,
    }
}

/// Whether a language tag is one of the supported identifiers
pub fn is_supported(language: &str) -> bool {
    languages::ALL.contains(&language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_supported_tags_map_to_nonzero_ids() {
        for tag in languages::ALL {
            assert!(judge_language_id(tag) > 0, "no id for {tag}");
        }
    }

    #[test]
    fn test_known_ids() {
        assert_eq!(judge_language_id("c"), 50);
        assert_eq!(judge_language_id("cpp"), 54);
        assert_eq!(judge_language_id("java"), 62);
        assert_eq!(judge_language_id("javascript"), 63);
        assert_eq!(judge_language_id("python"), 71);
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(judge_language_id("brainfuck"), language_ids::FALLBACK);
        assert_eq!(judge_language_id(""), language_ids::FALLBACK);
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("python"));
        assert!(!is_supported("cobol"));
    }
}
