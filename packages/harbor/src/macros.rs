#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if $assert {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if $assert {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

// Validate all bps to be between the range 0..=max
#[macro_export]
macro_rules! validate_bps {
    ($env:expr, $value:expr, $max:expr) => {
        $crate::validate!(
            $env,
            $value <= $max,
            $crate::error::ErrorCode::InvalidParameter,
            "The bps value {} is out of range, max {}",
            $value,
            $max
        )
    };
}
