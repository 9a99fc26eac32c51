/// Compute the greatest common divisor of the absolute values of `a` and `b`.
/// `gcd(a, 0)` is `|a|` and `gcd(0, 0)` is `0`.
pub fn gcd_signed_i128(mut a: i128, mut b: i128) -> u128 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i128::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs()
}
