use crate::args;
use crate::volume::load_mesh;

pub fn info_command(args: args::InfoArgs) -> anyhow::Result<()> {
    let mesh = load_mesh(&args.cloud_path)?;
    let summary = mesh.summary();
    println!("points:    {}", summary.points);
    println!("facets:    {}", summary.facets);
    if let Some(b) = summary.bounds {
        println!("x:         {} .. {}", b.min.x, b.max.x);
        println!("y:         {} .. {}", b.min.y, b.max.y);
        println!("z:         {} .. {}", b.min.z, b.max.z);
    }
    println!(
        "elevation: {}",
        if summary.has_elevation { "yes" } else { "no" }
    );
    Ok(())
}
