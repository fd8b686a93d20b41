//! Internal integration-test crate for the community content pipeline.
//! All coverage lives under `tests/`.
