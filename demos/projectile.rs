//! Fires a projectile through wind and gravity and plots its path.
//!
//! ```text
//! RUST_LOG=info cargo run --example projectile -- /tmp/projectile.ppm
//! ```

use log::info;
use raytracer::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let env = Environment::new(vector(0., -0.1, 0.), vector(-0.01, 0., 0.));
    let mut projectile = Projectile::new(point(0., 1., 0.), vector(1., 1.8, 0.).unit() * 11.25);
    let mut canvas = Canvas::new(900, 500);
    let red = Color::new(1., 0., 0.);

    let mut tick = 0;
    while projectile.position.y > 0. {
        let Tuple { x, y, z, .. } = projectile.position;
        info!("tick {tick}: x = {x}, y = {y}, z = {z}");

        canvas.write_pixel(x as isize, canvas.height() as isize - y as isize, red);
        projectile = projectile.tick(&env)?;
        tick += 1;
    }

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("projectile.ppm"));

    canvas.write_ppm(std::io::BufWriter::new(std::fs::File::create(&path)?))?;
    info!("landed after {tick} ticks, wrote {}", path.display());

    Ok(())
}
