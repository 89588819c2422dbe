use anyhow::Context;
use log::info;
use tinvol::{NoProgress, ProgressSink, TriangulatedMesh, VolumeConfig};

use crate::args;
use crate::progress::TerminalProgress;

pub fn load_mesh(path: &std::path::Path) -> anyhow::Result<TriangulatedMesh> {
    let cloud = tinvol_cloud::read_cloud(path)
        .with_context(|| format!("failed to load point cloud {}", path.display()))?;
    info!("loaded {} points from {}", cloud.len(), path.display());
    TriangulatedMesh::delaunay(cloud)
        .with_context(|| format!("failed to triangulate {}", path.display()))
}

pub fn compute_volume(args: &args::VolumeArgs, progress: &mut dyn ProgressSink) -> anyhow::Result<f64> {
    let mesh = load_mesh(&args.cloud_path)?;
    let config = VolumeConfig::default()
        .with_reference_elevation(args.reference)
        .with_progress_length(args.bar_length);
    mesh.volume(&config, progress)
        .with_context(|| format!("failed to compute the volume of {}", args.cloud_path.display()))
}

pub fn volume_command(args: args::VolumeArgs) -> anyhow::Result<()> {
    let mut bar = TerminalProgress::new(std::io::stderr());
    let mut silent = NoProgress;
    let progress: &mut dyn ProgressSink = if args.quiet { &mut silent } else { &mut bar };
    let volume = compute_volume(&args, progress)?;
    println!("{}", volume);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use float_eq::assert_float_eq;
    use tinvol_test_data::{CSV_PLATEAU, XYZ_TILTED_SQUARE};

    use super::*;

    fn write_fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    fn volume_args(path: &std::path::Path, reference: f64) -> args::VolumeArgs {
        args::VolumeArgs {
            cloud_path: path.to_path_buf(),
            reference,
            bar_length: 20,
            quiet: true,
        }
    }

    #[test]
    fn tilted_square() {
        let f = write_fixture(XYZ_TILTED_SQUARE.bytes);
        let volume = compute_volume(&volume_args(f.path(), 0.0), &mut NoProgress).unwrap();
        assert_float_eq!(volume, XYZ_TILTED_SQUARE.volume, abs <= 1e-9);
    }

    #[test]
    fn plateau_with_progress_bar() {
        let f = write_fixture(CSV_PLATEAU.bytes);
        let mut bar = TerminalProgress::new(Vec::new());
        let volume = compute_volume(&volume_args(f.path(), 10.0), &mut bar).unwrap();
        assert_float_eq!(volume, 100_000.0, rmax <= 1e-9);
        let out = String::from_utf8(bar.into_inner()).unwrap();
        assert!(out.ends_with("| 100.0% Complete\n"));
    }

    #[test]
    fn collinear_cloud_has_no_volume() {
        // Three points on a line give no facets, and nothing to integrate.
        let f = write_fixture(b"x,y,z\n0,0,1\n1,1,1\n2,2,1\n");
        let volume = compute_volume(&volume_args(f.path(), 0.0), &mut NoProgress).unwrap();
        assert_float_eq!(volume, 0.0, abs <= 0.0);
    }

    #[test]
    fn missing_cloud_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = compute_volume(&volume_args(&path, 0.0), &mut NoProgress).unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }
}
