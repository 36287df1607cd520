//! Custom assertion macros
//!
//! Shorter assertions for the nested `Result<AuthOutcome, ApiError>` the
//! auth calls return.

/// Assert that a call succeeded and the server replied with tokens
#[macro_export]
macro_rules! assert_tokens {
    ($result:expr) => {
        match $result {
            Ok(Ok(tokens)) => tokens,
            Ok(Err(other)) => panic!("Expected tokens, got unrecognized reply: {:?}", other),
            Err(e) => panic!("Expected tokens, got error: {:?}", e),
        }
    };
}

/// Assert that a call succeeded but the reply was not a token object
#[macro_export]
macro_rules! assert_unrecognized {
    ($result:expr) => {
        match $result {
            Ok(Err(other)) => other,
            Ok(Ok(tokens)) => panic!("Expected unrecognized reply, got tokens: {:?}", tokens),
            Err(e) => panic!("Expected unrecognized reply, got error: {:?}", e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
