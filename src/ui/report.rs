use crate::models::AnalysisRecord;

const RULE_WIDTH: usize = 70;

/// Human-readable diagnostic block for one analysed chart
pub fn render_report(label: &str, record: &AnalysisRecord) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!(
        "\n{rule}\n\
         📊 DIAGNÓSTICO: {label}\n\
         {rule}\n\n\
         🎯 TENDENCIA:\n   \
         • Dirección: {trend} ({angle}°)\n   \
         • Confianza: {confidence}%\n\n\
         ⚡ MOMENTUM:\n   \
         • Dirección: {momentum}\n   \
         • Fuerza: {momentum_strength}%\n\n\
         📊 VOLATILIDAD:\n   \
         • Nivel: {volatility}\n   \
         • Score: {volatility_score}\n\n\
         💪 FUERZA CALIBRADA: {strength}%\n\
         🏷️  ESTADO: {state}\n\
         🕯️  MOVIMIENTO RECIENTE: {movement}\n",
        trend = record.trend,
        angle = record.trend_angle,
        confidence = record.trend_confidence,
        momentum = record.momentum,
        momentum_strength = record.momentum_strength,
        volatility = record.volatility,
        volatility_score = record.volatility_score,
        strength = record.strength,
        state = record.market_state,
        movement = record.recent_movement,
    );

    if record.reversal_detected {
        out.push_str("\n⚠️  REVERSIÓN DETECTADA\n");
    }

    out.push_str(&format!("\n{rule}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CandlePattern, MarketState, MomentumDirection, RecentMovement, TrendDirection,
        VolatilityLevel,
    };

    fn record(reversal_detected: bool) -> AnalysisRecord {
        AnalysisRecord {
            trend: TrendDirection::Bearish,
            strength: 72.5,
            norm_pct: 3.1416,
            trend_angle: -12.34,
            trend_confidence: 88,
            volatility: VolatilityLevel::High,
            volatility_score: 70.25,
            momentum: MomentumDirection::Bearish,
            momentum_strength: 64,
            candle_pattern: CandlePattern::Consolidation,
            recent_movement: RecentMovement::Falling,
            reversal_detected,
            market_state: MarketState::StrongBearish,
            is_trending: true,
            edge_strength: 1020.0,
            shape: (800, 400),
        }
    }

    #[test]
    fn test_report_contents() {
        let text = render_report("m15.png", &record(false));
        assert!(text.contains("DIAGNÓSTICO: m15.png"));
        assert!(text.contains("Dirección: bajista (-12.34°)"));
        assert!(text.contains("Confianza: 88%"));
        assert!(text.contains("Score: 70.25"));
        assert!(text.contains("FUERZA CALIBRADA: 72.5%"));
        assert!(text.contains("ESTADO: bajista_fuerte"));
        assert!(text.contains("MOVIMIENTO RECIENTE: bajando"));
        assert!(!text.contains("REVERSIÓN"));
    }

    #[test]
    fn test_report_layout() {
        let text = render_report("m5.png", &record(false));
        let rule = "=".repeat(RULE_WIDTH);
        assert!(text.starts_with(&format!("\n{}\n📊 DIAGNÓSTICO: m5.png\n{}\n\n", rule, rule)));
        assert!(text.contains("\n🎯 TENDENCIA:\n   • Dirección: bajista (-12.34°)\n   • Confianza: 88%\n"));
        assert!(text.contains("\n⚡ MOMENTUM:\n   • Dirección: bajista\n   • Fuerza: 64%\n"));
        assert!(text.ends_with(&format!("bajando\n\n{}\n", rule)));
    }

    #[test]
    fn test_reversal_warning() {
        let text = render_report("m1.png", &record(true));
        assert!(text.contains("REVERSIÓN DETECTADA"));
    }
}
