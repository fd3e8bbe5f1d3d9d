#![no_main]

//! Fuzz target for the input-validation surface.
//!
//! Validation runs on raw user input before anything else, so it must
//! never panic: arbitrary Unicode in emails, names, passwords, titles,
//! and status strings should always come back as accept or reject.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use taskboard::models::Status;
use taskboard::validate::{validate_create_issue, validate_login, validate_register};

#[derive(Arbitrary, Debug)]
struct ValidateInput {
    email: String,
    name: String,
    password: String,
    title: String,
    description: String,
}

fuzz_target!(|input: ValidateInput| {
    let _ = validate_login(&input.email, &input.password);
    let _ = validate_register(&input.email, &input.name, &input.password);

    let result = validate_create_issue(&input.title, &input.description);
    if input.title.chars().count() >= 1 && input.title.chars().count() <= 255 {
        assert!(result.is_ok());
    }

    let _ = input.title.parse::<Status>();
});
