use soroban_sdk::{ log, Env };

use crate::error::{ ErrorCode, HarborResult };

pub trait Cast: Sized {
    /// Perform a casting operation with error handling.
    #[track_caller]
    #[inline(always)]
    fn cast<T: TryFrom<Self>>(self, env: &Env) -> HarborResult<T> {
        match self.try_into() {
            Ok(result) => Ok(result),
            Err(_) => {
                log!(env, "Casting error thrown at line {}", line!());
                Err(ErrorCode::CastingFailure)
            }
        }
    }
}

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
impl Cast for i64 {}

#[cfg(test)]
mod test {
    use super::Cast;
    use crate::error::ErrorCode;
    use soroban_sdk::Env;

    #[test]
    fn cast_in_range() {
        let env = Env::default();
        assert_eq!(5_u64.cast::<i128>(&env), Ok(5_i128));
    }

    #[test]
    fn cast_negative_to_unsigned_fails() {
        let env = Env::default();
        assert_eq!((-1_i128).cast::<u64>(&env), Err(ErrorCode::CastingFailure));
    }
}
