//! End-to-end moderation coverage: obfuscation tolerance across the full
//! lexicon, censoring on the render path, and the validator gate.

use rc_moderation::{ContentCensor, ContentScanner, Validator, BANNED_TERMS};

#[test]
fn every_term_is_caught_with_hyphen_obfuscation() {
    let scanner = ContentScanner::new();
    for term in BANNED_TERMS {
        let hyphenated: Vec<String> = term.chars().map(String::from).collect();
        let hyphenated = hyphenated.join("-");
        assert!(
            scanner.scan(&format!("you {hyphenated} me")).is_offensive,
            "missed hyphenated: {hyphenated}"
        );
    }
}

#[test]
fn common_leetspeak_spellings_are_caught() {
    let scanner = ContentScanner::new();
    for obfuscated in ["sh1t", "b1tch", "a55hole", "5lut", "r3tard", "fa990t"] {
        assert!(
            scanner.scan(obfuscated).is_offensive,
            "missed leetspeak: {obfuscated}"
        );
    }
}

#[test]
fn scanner_and_censor_disagree_on_obfuscation_by_design() {
    // The scanner rejects obfuscated submissions; the censor only masks
    // exact literals that slipped in before the term joined the lexicon.
    let scanner = ContentScanner::new();
    let censor = ContentCensor::new();
    let obfuscated = "this is bull5hit";
    assert!(scanner.scan(obfuscated).is_offensive);
    assert_eq!(censor.censor(obfuscated), obfuscated);
}

#[test]
fn censor_is_idempotent_on_clean_text() {
    let censor = ContentCensor::new();
    let text = "90 days clean and the cravings finally quieted down";
    assert_eq!(censor.censor(text), text);
    assert_eq!(censor.censor(&censor.censor(text)), censor.censor(text));
}

#[test]
fn censored_output_no_longer_contains_the_term() {
    let censor = ContentCensor::new();
    let masked = censor.censor("what a load of bullshit, honestly");
    assert!(!masked.contains("bullshit"));
    assert!(masked.contains(&"*".repeat("bullshit".len())));
}

#[test]
fn validator_gates_comments_the_way_the_ui_expects() {
    let validator = Validator::new();

    // Unkind but clean: accepted, moderation is lexical not sentimental.
    assert!(validator.validate_comment("you are such a loser").is_valid);

    // All caps over the length threshold: rejected.
    let shouted = validator.validate_comment("YOU ARE THE WORST PERSON EVER ALIVE TODAY");
    assert!(!shouted.is_valid);
    assert!(shouted.error_message.unwrap().contains("excessive capitalization"));

    // Obfuscated slur: rejected with the pattern index as the reason.
    let slur = validator.validate_comment("f u c k you");
    assert!(!slur.is_valid);
    assert!(slur.error_message.unwrap().contains("matched pattern"));
}

#[test]
fn empty_strings_flow_through_the_whole_pipeline_unchanged() {
    let scanner = ContentScanner::new();
    let censor = ContentCensor::new();
    let validator = Validator::new();
    assert!(!scanner.scan("").is_offensive);
    assert_eq!(censor.censor(""), "");
    assert!(validator.validate_comment("").is_valid);
    assert!(validator.validate_post("", "").is_valid);
}
