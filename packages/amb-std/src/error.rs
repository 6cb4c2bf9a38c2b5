/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

// The following macros are mostly intended to serve as pseudo-documentation within tests,
// in addition to convenience/clarity

/// Assert that a [`Result`] is [`Ok`]
///
/// If the provided expresion evaulates to [`Ok`], then the
/// macro returns the value contained within the [`Ok`]. If
/// the [`Result`] is an [`Err`] then the macro will [`panic`]
/// with a message that includes the expression and the error.
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            core::result::Result::Ok(v) => v,
            core::result::Result::Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Assert that an [`Option`] is [`Some`]
///
/// If the provided expresion evaulates to [`Some`], then the
/// macro returns the value contained within the [`Some`]. If
/// the [`Option`] is [`None`] then the macro will [`panic`]
/// with a message that includes the expression
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Assert that a [`Result`] is [`Err`] and matches a desired error
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            core::result::Result::Err(e) => {
                if $e != e {
                    panic!("Expected error {}, got {:?} instead", stringify!($e), e)
                }
            }
            core::result::Result::Ok(v) => {
                panic!(
                    "Expected error when calling {}, got {:?} instead",
                    stringify!($x),
                    v
                );
            }
        }
    };
}

/// Assert that the result of a `try_*` client call is the given contract error.
///
/// Client `try_*` calls return `Result<Result<T, ConversionError>, Result<E, InvokeError>>`,
/// the contract error sits in the inner `Ok` of the outer `Err`.
#[macro_export]
macro_rules! assert_contract_err {
    ( $given:expr, $expected:expr ) => {
        match $given {
            core::result::Result::Ok(v) => {
                panic!(
                    "Expected error {}, got {:?} instead",
                    stringify!($expected),
                    v
                )
            }
            core::result::Result::Err(core::result::Result::Ok(e)) => {
                assert_eq!(e, $expected)
            }
            core::result::Result::Err(core::result::Result::Err(e)) => {
                panic!(
                    "Expected error {}, got invoke error {:?} instead",
                    stringify!($expected),
                    e
                )
            }
        }
    };
}

/// Mock the authorization of `$caller` for exactly the given client call and
/// assert that the call succeeds. Returns the call's return value.
#[macro_export]
macro_rules! assert_invoke_auth_ok {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        use soroban_sdk::IntoVal;

        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name: &stringify!($method).replace("try_", ""),
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        match call_result {
            Ok(Ok(v)) => v,
            Ok(Err(e)) => panic!("Conversion error: {:?}", e),
            Err(e) => panic!("Expected Ok result, but got an error {:?}", e),
        }
    }};
}

/// Mock the authorization of `$caller` for exactly the given client call and
/// assert that the call fails.
#[macro_export]
macro_rules! assert_invoke_auth_err {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        use soroban_sdk::IntoVal;

        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name: &stringify!($method).replace("try_", ""),
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        assert!(
            call_result.is_err(),
            "Expected an authorization error when calling {}",
            stringify!($method)
        );
    }};
}
