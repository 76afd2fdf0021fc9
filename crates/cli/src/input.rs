//! Flag input files: a JSON request document or a CSV with columns `px,py,dx,dy`.

use anyhow::{bail, Context, Result};
use flagflow::api::TransformationRequest;
use polars::prelude::*;
use std::path::Path;

const CSV_COLUMNS: [&str; 4] = ["px", "py", "dx", "dy"];

/// Load screen-coordinate flags; `pplane` overrides the file's projection plane.
pub fn load_request(path: &Path, pplane: Option<[f64; 3]>) -> Result<TransformationRequest> {
    let mut request = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice::<TransformationRequest>(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        Some("csv") => read_csv(path)?,
        _ => bail!("unsupported input {}: expected .json or .csv", path.display()),
    };
    if let Some(plane) = pplane {
        request.pplane = plane;
    }
    tracing::info!(flags = request.ps.len(), input = %path.display(), "input_loaded");
    Ok(request)
}

fn read_csv(path: &Path) -> Result<TransformationRequest> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select(CSV_COLUMNS.map(|c| col(c).cast(DataType::Float64)))
        .collect()
        .with_context(|| format!("reading columns {CSV_COLUMNS:?} from {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let mut columns = Vec::with_capacity(CSV_COLUMNS.len());
    for name in CSV_COLUMNS {
        let values: Option<Vec<f64>> = df.column(name)?.f64()?.into_iter().collect();
        columns.push(values.with_context(|| format!("column {name} has missing values"))?);
    }
    let (px, py, dx, dy) = (&columns[0], &columns[1], &columns[2], &columns[3]);
    Ok(TransformationRequest {
        ps: px.iter().zip(py).map(|(&x, &y)| [x, y]).collect(),
        ds: dx.iter().zip(dy).map(|(&x, &y)| [x, y]).collect(),
        pplane: [0.0, 0.0, 1.0],
        oldpplane: [0.0, 0.0, 1.0],
    })
}

/// Parse `x,y,z` into a plane normal.
pub fn parse_plane(s: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<std::result::Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, z] if [x, y, z].iter().any(|v| **v != 0.0) => Ok([*x, *y, *z]),
        [_, _, _] => Err("projection plane normal must be non-zero".to_string()),
        _ => Err(format!("expected three comma-separated numbers, got {}", parts.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn csv_columns_become_screen_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.csv");
        fs::write(&path, "px,py,dx,dy\n50,0,50,10\n-25,43.3,-33.66,38.3\n-25,-43.3,-16.34,-48.3\n")
            .unwrap();
        let req = load_request(&path, Some([0.0, 0.0, 2.0])).unwrap();
        assert_eq!(req.ps.len(), 3);
        assert_eq!(req.ps[0], [50.0, 0.0]);
        assert_eq!(req.ds[2], [-16.34, -48.3]);
        assert_eq!(req.pplane, [0.0, 0.0, 2.0]);
    }

    #[test]
    fn json_request_is_read_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");
        fs::write(
            &path,
            r#"{"ps": [[1, 0], [0, 1], [-1, 0]], "ds": [[1, 1], [-1, 1], [-1, -1]], "pplane": [0, 1, 1]}"#,
        )
        .unwrap();
        let req = load_request(&path, None).unwrap();
        assert_eq!(req.pplane, [0.0, 1.0, 1.0]);
        assert_eq!(req.oldpplane, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_request(Path::new("flags.parquet"), None).unwrap_err();
        assert!(err.to_string().contains("unsupported input"));
    }

    #[test]
    fn plane_argument_parsing() {
        assert_eq!(parse_plane("0, 0.6 ,0.8"), Ok([0.0, 0.6, 0.8]));
        assert!(parse_plane("0,0,0").is_err());
        assert!(parse_plane("1,2").is_err());
        assert!(parse_plane("a,b,c").is_err());
    }
}
