//! # Banned-term Lexicon
//!
//! The fixed vocabulary the scanner and censor operate on. Terms are stored
//! in lowercase canonical form and loaded once at process start; list order
//! matters because the scanner reports the first matching term only.
//!
//! Deliberately narrower than a general-purpose profanity list: words like
//! "kill" or "relapse" are everyday vocabulary in a recovery community and
//! must never trip the filter.

/// Lowercase canonical banned terms, in match-priority order.
pub const BANNED_TERMS: &[&str] = &[
    // Slurs and hate speech
    "nigger",
    "nigga",
    "faggot",
    "fag",
    "kike",
    "spic",
    "chink",
    "wetback",
    "beaner",
    "tranny",
    "dyke",
    "coon",
    "retard",
    "retarded",
    // Strong profanity
    "fuck",
    "fucking",
    "fucker",
    "motherfucker",
    "shit",
    "bullshit",
    "bitch",
    "asshole",
    "cunt",
    "cock",
    "cocksucker",
    "pussy",
    "dickhead",
    "whore",
    "slut",
    "bastard",
    "twat",
    "wanker",
    "prick",
    "douchebag",
    // Targeted harassment shorthand
    "kys",
];
