// ============================================================================
// FORMAT - Formateo de tamaños y ahorro de almacenamiento
// ============================================================================
// Funciones puras: ningún acceso al DOM ni a la red.
// ============================================================================

/// Unidades de magnitud soportadas (base 1024)
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formatear un conteo de bytes como string legible ("1 KB", "1.5 MB").
///
/// Ausente o cero devuelve "0 Bytes". La unidad se elige con
/// floor(log_1024(bytes)); valores por encima de GB se quedan en GB.
/// El valor se redondea a 2 decimales y se descartan los ceros finales.
pub fn format_bytes(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        None | Some(0) => return "0 Bytes".to_string(),
        Some(b) => b,
    };

    // floor(log_1024(b)) == floor(log_2(b)) / 10, en aritmética entera
    let unit = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (value * 100.0).round() / 100.0;

    // Display de f64 ya omite los ceros finales del redondeo (1.00 -> "1")
    format!("{} {}", rounded, UNITS[unit])
}

/// Clasificación de signo del ahorro, con su clase CSS asociada
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavingsColor {
    Positive,
    Negative,
    Neutral,
}

impl SavingsColor {
    pub fn css_class(&self) -> &'static str {
        match self {
            SavingsColor::Positive => "savings-positive",
            SavingsColor::Negative => "savings-negative",
            SavingsColor::Neutral => "savings-neutral",
        }
    }
}

/// Delta de bytes y porcentaje para un par (original, optimizado).
/// None en el caso degenerado: original ausente/cero u optimizado ausente.
fn savings_parts(original: Option<u64>, optimized: Option<u64>) -> Option<(i64, f64)> {
    let original = match original {
        None | Some(0) => return None,
        Some(o) => o,
    };
    let optimized = optimized?;

    let saved = original as i64 - optimized as i64;
    let percent = saved as f64 / original as f64 * 100.0;
    Some((saved, percent))
}

/// Texto de ahorro: "<bytes> (<pct>%)".
///
/// Cuando el tamaño creció, el delta se muestra como magnitud positiva con
/// prefijo "+" mientras el porcentaje conserva su signo negativo
/// ("+100 Bytes (-20.0%)"). El caso degenerado devuelve "0 Bytes (0.0%)".
pub fn savings_text(original: Option<u64>, optimized: Option<u64>) -> String {
    match savings_parts(original, optimized) {
        None => "0 Bytes (0.0%)".to_string(),
        Some((saved, percent)) if saved >= 0 => {
            format!("{} ({:.1}%)", format_bytes(Some(saved as u64)), percent)
        }
        Some((saved, percent)) => {
            format!("+{} ({:.1}%)", format_bytes(Some(saved.unsigned_abs())), percent)
        }
    }
}

/// Color de ahorro para el mismo par de entradas que `savings_text`.
/// Ambas funciones comparten `savings_parts` y nunca discrepan en dirección.
pub fn savings_color(original: Option<u64>, optimized: Option<u64>) -> SavingsColor {
    match savings_parts(original, optimized) {
        None => SavingsColor::Neutral,
        Some((saved, _)) if saved >= 0 => SavingsColor::Positive,
        Some(_) => SavingsColor::Negative,
    }
}
