use crate::domain::model::{Combination, Instantiation, Template};
use crate::utils::error::{Result, ScrapperError};

/// Expands template type lists into concrete instantiations.
///
/// `All` walks the cartesian product with the first template varying slowest;
/// `Fixed` pairs the lists position by position and rejects uneven lengths.
pub fn template_combinations(
    templates: &[Template],
    combination: Combination,
) -> Result<Vec<Instantiation>> {
    if templates.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<Vec<&str>> = match combination {
        Combination::All => cartesian_product(templates),
        Combination::Fixed => zip_positions(templates)?,
    };

    Ok(rows
        .into_iter()
        .map(|row| {
            Instantiation::new(
                templates
                    .iter()
                    .zip(row)
                    .map(|(template, ty)| (template.name.clone(), ty.to_string()))
                    .collect(),
            )
        })
        .collect())
}

fn cartesian_product(templates: &[Template]) -> Vec<Vec<&str>> {
    let mut rows: Vec<Vec<&str>> = vec![Vec::new()];
    for template in templates {
        rows = rows
            .into_iter()
            .flat_map(|prefix| {
                template.types.iter().map(move |ty| {
                    let mut row = prefix.clone();
                    row.push(ty.as_str());
                    row
                })
            })
            .collect();
    }
    rows
}

fn zip_positions(templates: &[Template]) -> Result<Vec<Vec<&str>>> {
    let len = templates[0].types.len();
    if let Some(uneven) = templates.iter().find(|t| t.types.len() != len) {
        return Err(ScrapperError::invalid_value(
            "templates",
            uneven.name.as_str(),
            format!(
                "'fixed' combination needs type lists of equal length (expected {}, found {})",
                len,
                uneven.types.len()
            ),
        ));
    }

    Ok((0..len)
        .map(|pos| templates.iter().map(|t| t.types[pos].as_str()).collect())
        .collect())
}
