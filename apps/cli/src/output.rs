use ratecast_core::forecast::ForecastOutcome;

/// Renders the forecast as pretty JSON or as one `date  value` line per day.
pub fn render(outcome: &ForecastOutcome, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    let currency = outcome.currency.to_uppercase();
    if outcome.points.is_empty() {
        return Ok(format!("No forecast available in {}", currency));
    }

    let mut lines = vec![format!("Forecast in {}", currency)];
    lines.extend(
        outcome
            .points
            .iter()
            .map(|point| format!("{}  {:.4}", point.date, point.value)),
    );
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecast_core::forecast::ForecastPoint;

    fn outcome(points: Vec<ForecastPoint>) -> ForecastOutcome {
        ForecastOutcome {
            currency: "eur".to_string(),
            points,
        }
    }

    #[test]
    fn test_text_output() {
        let text = render(
            &outcome(vec![
                ForecastPoint {
                    date: "2024-03-04".to_string(),
                    value: 921.123456,
                },
                ForecastPoint {
                    date: "2024-03-05".to_string(),
                    value: 922.5,
                },
            ]),
            false,
        )
        .unwrap();
        assert_eq!(
            text,
            "Forecast in EUR\n2024-03-04  921.1235\n2024-03-05  922.5000"
        );
    }

    #[test]
    fn test_empty_text_output() {
        assert_eq!(
            render(&outcome(Vec::new()), false).unwrap(),
            "No forecast available in EUR"
        );
    }

    #[test]
    fn test_json_output_round_trips() {
        let original = outcome(vec![ForecastPoint {
            date: "2024-03-04".to_string(),
            value: 1.5,
        }]);
        let json = render(&original, true).unwrap();
        let parsed: ForecastOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
