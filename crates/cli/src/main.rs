use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flagflow::api::{
    compute_transformation_data, AnimationCfg, HullTessellator, Tessellator, TrafoRange,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "flagflow")]
#[command(about = "Deformation frames for flag complexes in RP²")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Animate the flows applicable to the input flags and write the frames as JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Projection plane normal `x,y,z`
        #[arg(long, value_parser = input::parse_plane)]
        pplane: Option<[f64; 3]>,
        #[arg(long)]
        trafo_range: Option<u32>,
        #[arg(long)]
        t_step: Option<f64>,
        /// Attach a tessellation of this subdivision depth to every frame
        #[arg(long)]
        tessellate: Option<usize>,
    },
    /// Print the triple ratio of flags 0, 1, 2 and whether the complex is positive
    Ratio {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            pplane,
            trafo_range,
            t_step,
            tessellate,
        } => {
            let defaults = TrafoRange::default();
            let cfg = AnimationCfg {
                range: TrafoRange {
                    trafo_range: trafo_range.unwrap_or(defaults.trafo_range),
                    t_step: t_step.unwrap_or(defaults.t_step),
                },
                tessellation_depth: tessellate,
                ..AnimationCfg::default()
            };
            run(&input, &out, pplane, &cfg)
        }
        Action::Ratio { input } => ratio(&input),
        Action::Report => report(),
    }
}

fn run(input: &Path, out: &Path, pplane: Option<[f64; 3]>, cfg: &AnimationCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "run");
    let request = input::load_request(input, pplane)?;
    let tessellator = cfg.tessellation_depth.map(|depth| HullTessellator { depth });
    let response = compute_transformation_data(
        &request,
        cfg,
        tessellator.as_ref().map(|t| t as &dyn Tessellator),
    );
    if response.error != 0 {
        tracing::warn!(code = response.error, "no frames computed");
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec(&response)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(serde_json::json!({
        "pplane": request.pplane,
        "flags": request.ps.len(),
        "animation": cfg,
        "status": response.error,
        "trafos": response.trafo_range.keys().collect::<Vec<_>>(),
    }))
    .with_input(input);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "frames written");
    Ok(())
}

fn ratio(input: &Path) -> Result<()> {
    let complex = input::load_request(input, None)?.to_complex()?;
    let ratio = complex.get_triple_ratio([0, 1, 2])?;
    let obj = serde_json::json!({
        "flags": complex.len(),
        "triple_ratio": ratio,
        "positive": ratio > 0.0,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(serde_json::json!({}), &[], &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
