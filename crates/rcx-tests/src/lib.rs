//! Integration tests for rcx crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the engine, the user definitions and the image I/O layer.

#[cfg(test)]
mod tests {
    use rcx_config::UserDefinitions;
    use rcx_core::{
        build_mapping, build_range_mapping, builtin, remap_image, Catalog, Color, ColorRange,
        ImageBuffer, TransformSpec,
    };
    use rcx_io::{export, ExportOutcome, ExportPlan, JobStatus, OutputNaming};
    use std::path::Path;
    use tempfile::tempdir;

    const OPAQUE: u8 = 0xFF;

    fn opaque(c: Color) -> u32 {
        c.with_alpha(OPAQUE)
    }

    /// Writes an 8-bit indexed PNG, the usual layout for sprite art.
    fn write_indexed(path: &Path, width: u32, height: u32, palette: &[Color], indices: &[u8]) {
        let file = std::fs::File::create(path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(palette.iter().flat_map(|c| c.channels()).collect::<Vec<u8>>());
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(indices).unwrap();
        writer.finish().unwrap();
    }

    /// Blue range over the reference ramp, through PNG files on disk.
    #[test]
    fn test_blue_scenario_through_png() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("unit.png");
        let output = dir.path().join("unit-blue.png");

        let src = ImageBuffer::from_data(
            2,
            2,
            vec![
                opaque(Color::RED),
                Color::WHITE.with_alpha(0x80),
                opaque(Color::BLACK),
                Color::RED.with_alpha(0x00),
            ],
        )
        .unwrap();
        rcx_io::write(&input, &src).unwrap();

        let catalog = Catalog::builtin();
        let blue = catalog.range("blue").unwrap();
        let reference = catalog.palette(builtin::REFERENCE_PALETTE_ID).unwrap();
        let mapping = build_mapping(&TransformSpec::Range(blue.clone()), reference.colors());

        let outcome = remap_image(&rcx_io::read(&input).unwrap(), &mapping);
        assert!(outcome.all_mapped);
        rcx_io::write(&output, &outcome.image).unwrap();

        let loaded = rcx_io::read(&output).unwrap();
        assert_eq!(
            loaded.pixels(),
            &[
                opaque(blue.mid()),
                blue.max().with_alpha(0x80),
                opaque(blue.min()),
                blue.mid().with_alpha(0x00),
            ]
        );
    }

    /// Recoloring with the reference range leaves reference art untouched.
    #[test]
    fn test_reference_range_is_identity_on_ramp_image() {
        let ramp = builtin::reference_palette();
        let pixels: Vec<u32> = ramp.colors().iter().map(|&c| opaque(c)).collect();
        let src = ImageBuffer::from_data(ramp.len() as u32, 1, pixels).unwrap();

        let mapping = build_range_mapping(&ColorRange::reference(), ramp.colors());
        let out = remap_image(&src, &mapping);
        assert!(out.all_mapped);
        assert_eq!(out.image, src);
    }

    /// Full range-mode export from an indexed sprite drawn on the default key.
    #[test]
    fn test_range_export_from_indexed_sprite() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let catalog = Catalog::builtin();
        let key = catalog.palette(builtin::DEFAULT_KEY_PALETTE_ID).unwrap();
        let input = dir.path().join("knight.png");
        write_indexed(&input, 3, 1, &[Color::BLACK, Color::RED, Color::WHITE], &[0, 1, 2]);

        let source = match rcx_io::open(Some(input.as_path())).unwrap() {
            rcx_io::OpenOutcome::Opened(s) => s,
            rcx_io::OpenOutcome::NoSelection => panic!("expected an image"),
        };
        let naming = OutputNaming::for_source(&out_dir, &source.path);
        let plan = ExportPlan::ranges(&catalog, key, &[], &naming);

        let ExportOutcome::Written(report) = export(&source.image, &plan, false) else {
            panic!("export was canceled");
        };
        assert_eq!(report.results.len(), 15);
        assert!(report.results.iter().all(|r| r.status == JobStatus::Complete));

        let gold_path = out_dir.join("knight-RC-red-15-gold.png");
        assert!(out_dir.join("knight-RC-red-1-red.png").exists());
        assert!(gold_path.exists());

        // Shadow, base and highlight land on the range anchors
        let gold = catalog.range("gold").unwrap();
        let loaded = rcx_io::read(&gold_path).unwrap();
        assert_eq!(
            loaded.pixels(),
            &[opaque(gold.min()), opaque(gold.mid()), opaque(gold.max())]
        );

        let text = rcx_io::png::read_text(&gold_path).unwrap();
        assert_eq!(text[0].1, rcx_io::provenance());

        // Second run without force is canceled and lists all 15 outputs
        match export(&source.image, &plan, false) {
            ExportOutcome::Canceled { conflicts } => assert_eq!(conflicts.len(), 15),
            other => panic!("expected cancel, got {other:?}"),
        }
    }

    /// Palette swap over an indexed sprite maps colors by position.
    #[test]
    fn test_palette_swap_export() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::builtin();
        let from = catalog.palette("magenta").unwrap();
        let to = catalog.palette("flag_green").unwrap();

        let input = dir.path().join("flag.png");
        write_indexed(&input, 2, 2, &from.colors()[..4], &[0, 1, 2, 3]);
        let image = rcx_io::read(&input).unwrap();

        let plan = ExportPlan::palette_swap(from, to, &OutputNaming::new(dir.path(), "flag"));
        let ExportOutcome::Written(report) = export(&image, &plan, false) else {
            panic!("export was canceled");
        };
        assert!(report.is_success());

        let loaded = rcx_io::read(dir.path().join("flag-PAL-magenta-flag_green.png")).unwrap();
        let expected: Vec<u32> = to.colors()[..4].iter().map(|&c| opaque(c)).collect();
        assert_eq!(loaded.pixels(), expected.as_slice());
    }

    /// A user override of a built-in range changes its colors in exports
    /// but not its name or ordinal.
    #[test]
    fn test_user_override_drives_export() {
        let dir = tempdir().unwrap();
        let defs_path = dir.path().join("rcx").join("definitions.yaml");

        let mut defs = UserDefinitions::new();
        defs.add_or_update_range(ColorRange::new(
            "blue",
            "Ignored",
            Color::from_u32(0x0000AA),
            Color::WHITE,
            Color::BLACK,
            Color::from_u32(0x0000AA),
        ));
        defs.save(&defs_path).unwrap();

        let catalog = UserDefinitions::load(&defs_path).unwrap().catalog();
        assert_eq!(catalog.range("blue").unwrap().name(), "Blue");

        let reference = builtin::reference_palette();
        let source = ImageBuffer::filled(2, 2, opaque(Color::RED));
        let plan = ExportPlan::ranges(
            &catalog,
            &reference,
            &["blue"],
            &OutputNaming::new(dir.path(), "s"),
        );
        let ExportOutcome::Written(report) = export(&source, &plan, false) else {
            panic!("export was canceled");
        };
        assert!(report.is_success());

        let loaded = rcx_io::read(dir.path().join("s-RC-red-2-blue.png")).unwrap();
        assert!(loaded.pixels().iter().all(|&px| px == 0xFF0000AA));
    }

    /// Unmapped outline pixels survive and mark the job incomplete.
    #[test]
    fn test_unmapped_pixels_reported_incomplete() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::builtin();
        let key = catalog.palette("magenta").unwrap();
        let outline = 0xFF101010;
        let source = ImageBuffer::from_data(2, 1, vec![opaque(key.colors()[5]), outline]).unwrap();

        let plan = ExportPlan::ranges(&catalog, key, &["teal"], &OutputNaming::new(dir.path(), "u"));
        let ExportOutcome::Written(report) = export(&source, &plan, true) else {
            panic!("forced export was canceled");
        };
        assert_eq!(report.incomplete().count(), 1);

        let loaded = rcx_io::read(dir.path().join("u-RC-magenta-9-teal.png")).unwrap();
        assert_eq!(loaded.pixel(1, 0), outline);
        assert_ne!(loaded.pixel(0, 0), opaque(key.colors()[5]));
    }
}
