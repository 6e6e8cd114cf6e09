/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// First half of the png signature, `\x89PNG`
pub const PNG_SIGNATURE_HI: u32 = 0x8950_4E47;
/// Second half of the png signature, `\r\n\x1A\n`
pub const PNG_SIGNATURE_LO: u32 = 0x0D0A_1A0A;

/// Chunk lengths are limited to 2^31-1 by the format
pub const MAX_CHUNK_LENGTH: u32 = (1 << 31) - 1;

pub const IHDR_LENGTH: u32 = 13;
pub const SRGB_LENGTH: u32 = 1;
pub const GAMA_LENGTH: u32 = 4;
pub const PHYS_LENGTH: u32 = 9;
pub const CHRM_LENGTH: u32 = 32;
