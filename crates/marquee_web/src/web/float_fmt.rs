/// Float formatting helpers for wasm.
///
/// `format!` on floats has had wasm-facing panics in some
/// toolchain/browser combinations, so these helpers scale + round into an
/// `i64` and format integers instead, with `NaN`/`±Inf` handled up front.

#[inline]
pub(super) fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    fmt_f64_fixed_inner(v, decimals, false)
}

#[inline]
pub(super) fn fmt_f64_signed_fixed(v: f64, decimals: usize) -> String {
    fmt_f64_fixed_inner(v, decimals, true)
}

/// Whole-dollar rendering with thousands grouping: `$1,234,567`.
/// Non-finite amounts render as an em-dash placeholder.
pub(super) fn fmt_usd(v: f64) -> String {
    if !v.is_finite() {
        return "$—".to_string();
    }
    let rounded = v.abs().round();
    if rounded > i64::MAX as f64 {
        return "$—".to_string();
    }

    let digits = (rounded as i64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if v < 0.0 {
        grouped.push('-');
    }
    grouped.push('$');
    let first_group = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn fmt_f64_fixed_inner(v: f64, decimals: usize, force_sign: bool) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    // Clamp decimals to something reasonable to avoid huge powers.
    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1_i64);
    let scale_f = scale_i64 as f64;

    let scaled = (v * scale_f).round();
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled_i = scaled as i64;
    let negative = scaled_i < 0 || (scaled_i == 0 && v.is_sign_negative());
    let abs_i = scaled_i.abs();
    let int_part = abs_i / scale_i64;
    let frac_part = abs_i % scale_i64;

    let mut out = String::new();
    if negative {
        out.push('-');
    } else if force_sign {
        out.push('+');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}
