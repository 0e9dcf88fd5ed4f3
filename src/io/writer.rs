use std::io::Write;

use anyhow::Result;

use crate::letters::alphabet;
use crate::profile::{FrequencyProfile, LanguageCode, LanguageMatch};

const CHART_WIDTH: usize = 32;

/// Write the ranked language list, most similar first.
pub fn output_ranking(matches: &[LanguageMatch], writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "language\tsimilarity")?;
    for m in matches {
        writeln!(writer, "{}\t{:.6}", m.language, m.similarity)?;
    }
    Ok(())
}

/// Render the comparative letter-frequency chart: one row per letter, one
/// column per base profile, the control column last with a proportional
/// bar. Purely observational output.
pub fn render_chart(
    bases: &[(LanguageCode, FrequencyProfile)],
    control: &FrequencyProfile,
    writer: &mut dyn Write,
) -> Result<()> {
    writeln!(writer, "\n# Letter frequency comparison")?;

    write!(writer, "letter")?;
    for (language, _) in bases {
        write!(writer, "\t{}", language)?;
    }
    writeln!(writer, "\tcontrol")?;

    let max_freq = bases
        .iter()
        .map(|(_, profile)| profile.values())
        .chain(std::iter::once(control.values()))
        .flatten()
        .fold(0.0_f64, |max, &freq| max.max(freq));

    for (idx, letter) in alphabet().enumerate() {
        write!(writer, "{}", letter)?;
        for (_, profile) in bases {
            write!(writer, "\t{:.4}", profile.frequency(idx))?;
        }

        let control_freq = control.frequency(idx);
        let bar_len = if max_freq > 0.0 {
            ((control_freq / max_freq) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        writeln!(writer, "\t{:.4}\t|{}", control_freq, "#".repeat(bar_len))?;
    }

    Ok(())
}
