//! Float formatting helpers for wasm.
//!
//! Rust's float-to-decimal formatting has had wasm-facing panics in some
//! toolchain/browser combinations, so render paths never call `format!` on a
//! raw float. These helpers handle non-finite values explicitly and, for
//! finite ones, scale + round into an `i64` and format integers.

pub(super) fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    fmt_inner(v, decimals, false)
}

pub(super) fn fmt_f64_signed_fixed(v: f64, decimals: usize) -> String {
    fmt_inner(v, decimals, true)
}

fn fmt_inner(v: f64, decimals: usize, force_sign: bool) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    let decimals = decimals.min(9);
    let scale = 10_i64.pow(decimals as u32);
    let scaled = (v * scale as f64).round();
    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled = scaled as i64;
    let negative = scaled < 0 || (scaled == 0 && v.is_sign_negative());
    let abs = scaled.abs();
    let int_part = abs / scale;
    let frac_part = abs % scale;

    let mut out = String::new();
    if negative {
        out.push('-');
    } else if force_sign {
        out.push('+');
    }
    out.push_str(&int_part.to_string());
    if decimals > 0 {
        out.push('.');
        let frac = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac.len()) {
            out.push('0');
        }
        out.push_str(&frac);
    }
    out
}
