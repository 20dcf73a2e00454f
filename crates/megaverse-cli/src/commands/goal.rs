use megaverse_core::{EntityKind, MegaverseConfig, decode_grid, render};

pub async fn goal(config: &MegaverseConfig, format: &str) -> anyhow::Result<()> {
    let client = super::client(config)?;
    let grid = client.fetch_goal().await?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
        _ => {
            print!("{}", render(&grid));
            let decoded = decode_grid(&grid);
            let count = |kind: EntityKind| {
                decoded
                    .commands
                    .iter()
                    .filter(|c| c.kind() == kind)
                    .count()
            };
            println!();
            println!(
                "{} polyanets, {} soloons, {} comeths, {} undecodable",
                count(EntityKind::Polyanet),
                count(EntityKind::Soloon),
                count(EntityKind::Cometh),
                decoded.errors.len()
            );
        }
    }

    Ok(())
}
