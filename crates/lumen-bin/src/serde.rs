/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use lumen_png::{AncillaryInfo, Chromaticities, Image, PhysicalDimensions};

/// What gets printed for a decoded file
pub struct Metadata<'a> {
    file:      &'a str,
    size:      u64,
    image:     &'a Image,
    ancillary: &'a AncillaryInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a str, size: u64, image: &'a Image, ancillary: &'a AncillaryInfo) -> Metadata<'a> {
        Metadata {
            file,
            size,
            image,
            ancillary
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 14)?;

        // three bytes per palette entry
        let palette_entries = self.image.palette().map(|p| p.len() / 3);

        state.serialize_field("file", self.file)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.image.width())?;
        state.serialize_field("height", &self.image.height())?;
        state.serialize_field("pixel_scheme", &self.image.pixel_scheme())?;
        state.serialize_field("bits_per_pixel", &self.image.bits_per_pixel())?;
        state.serialize_field("has_alpha", &self.image.pixel_scheme().has_alpha())?;
        state.serialize_field("row_stride", &self.image.row_stride())?;
        state.serialize_field("data_length", &self.image.data_length())?;
        state.serialize_field("palette_entries", &palette_entries)?;
        state.serialize_field("gamma", &self.ancillary.gamma)?;
        state.serialize_field(
            "physical_dimensions",
            &self.ancillary.physical_dimensions.as_ref().map(Phys)
        )?;
        state.serialize_field(
            "chromaticities",
            &self.ancillary.chromaticities.as_ref().map(Chrm)
        )?;
        state.serialize_field("rendering_intent", &self.ancillary.rendering_intent)?;

        state.end()
    }
}

struct Phys<'a>(&'a PhysicalDimensions);

impl<'a> Serialize for Phys<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PhysicalDimensions", 3)?;

        state.serialize_field("ppu_x", &self.0.ppu_x)?;
        state.serialize_field("ppu_y", &self.0.ppu_y)?;
        state.serialize_field("unit", &self.0.unit)?;

        state.end()
    }
}

struct Chrm<'a>(&'a Chromaticities);

impl<'a> Serialize for Chrm<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let c = self.0;
        let mut state = serializer.serialize_struct("Chromaticities", 8)?;

        state.serialize_field("white_x", &c.white_x)?;
        state.serialize_field("white_y", &c.white_y)?;
        state.serialize_field("red_x", &c.red_x)?;
        state.serialize_field("red_y", &c.red_y)?;
        state.serialize_field("green_x", &c.green_x)?;
        state.serialize_field("green_y", &c.green_y)?;
        state.serialize_field("blue_x", &c.blue_x)?;
        state.serialize_field("blue_y", &c.blue_y)?;

        state.end()
    }
}
