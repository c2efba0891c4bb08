// Row-major bitstreams, most significant bit first. Index 0 is ASCII 32.
pub(super) const GLYPH_COUNT: usize = 95;

/// 3x5 glyphs in a 3x6 cell.
pub(super) const SM: [[u32; 1]; GLYPH_COUNT] = [
    [0x00000], // ' '
    [0x12410], // '!'
    [0x2D000], // '"'
    [0x2FBE8], // '#'
    [0x1E4F0], // '$'
    [0x21508], // '%'
    [0x15558], // '&'
    [0x12000], // '\''
    [0x0A488], // '('
    [0x224A0], // ')'
    [0x05540], // '*'
    [0x02E80], // '+'
    [0x000A0], // ','
    [0x00E00], // '-'
    [0x00010], // '.'
    [0x09520], // '/'
    [0x3DB78], // '0'
    [0x164B8], // '1'
    [0x39F38], // '2'
    [0x39678], // '3'
    [0x2DE48], // '4'
    [0x3CE78], // '5'
    [0x3CF78], // '6'
    [0x39490], // '7'
    [0x3DF78], // '8'
    [0x3DE78], // '9'
    [0x02080], // ':'
    [0x020A0], // ';'
    [0x0A888], // '<'
    [0x071C0], // '='
    [0x222A0], // '>'
    [0x39610], // '?'
    [0x15F18], // '@'
    [0x15F68], // 'A'
    [0x35D70], // 'B'
    [0x1C918], // 'C'
    [0x35B70], // 'D'
    [0x3CF38], // 'E'
    [0x3CF20], // 'F'
    [0x1CB58], // 'G'
    [0x2DF68], // 'H'
    [0x3A4B8], // 'I'
    [0x09350], // 'J'
    [0x2DD68], // 'K'
    [0x24938], // 'L'
    [0x2FF68], // 'M'
    [0x2FFE8], // 'N'
    [0x15B50], // 'O'
    [0x35D20], // 'P'
    [0x15BD8], // 'Q'
    [0x35D68], // 'R'
    [0x1C470], // 'S'
    [0x3A490], // 'T'
    [0x2DB58], // 'U'
    [0x2DA90], // 'V'
    [0x2DFE8], // 'W'
    [0x2D568], // 'X'
    [0x2D490], // 'Y'
    [0x39538], // 'Z'
    [0x3C938], // '['
    [0x24448], // '\\'
    [0x39278], // ']'
    [0x15000], // '^'
    [0x00038], // '_'
    [0x22000], // '`'
    [0x15F68], // 'a'
    [0x35D70], // 'b'
    [0x1C918], // 'c'
    [0x35B70], // 'd'
    [0x3CF38], // 'e'
    [0x3CF20], // 'f'
    [0x1CB58], // 'g'
    [0x2DF68], // 'h'
    [0x3A4B8], // 'i'
    [0x09350], // 'j'
    [0x2DD68], // 'k'
    [0x24938], // 'l'
    [0x2FF68], // 'm'
    [0x2FFE8], // 'n'
    [0x15B50], // 'o'
    [0x35D20], // 'p'
    [0x15BD8], // 'q'
    [0x35D68], // 'r'
    [0x1C470], // 's'
    [0x3A490], // 't'
    [0x2DB58], // 'u'
    [0x2DA90], // 'v'
    [0x2DFE8], // 'w'
    [0x2D568], // 'x'
    [0x2D490], // 'y'
    [0x39538], // 'z'
    [0x1AC98], // '{'
    [0x12490], // '|'
    [0x326B0], // '}'
    [0x03C00], // '~'
];

/// 5x8 glyphs.
pub(super) const MD: [[u32; 5]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x21, 0x08, 0x42, 0x00, 0x80], // '!'
    [0x52, 0x94, 0x00, 0x00, 0x00], // '"'
    [0x52, 0xBE, 0xAF, 0xA9, 0x40], // '#'
    [0x23, 0xE8, 0xE2, 0xF8, 0x80], // '$'
    [0xC6, 0x44, 0x44, 0x4C, 0x60], // '%'
    [0x45, 0x28, 0x8A, 0xC9, 0xA0], // '&'
    [0x31, 0x88, 0x80, 0x00, 0x00], // '\''
    [0x11, 0x10, 0x84, 0x10, 0x40], // '('
    [0x41, 0x04, 0x21, 0x11, 0x00], // ')'
    [0x25, 0x5D, 0xF7, 0x54, 0x80], // '*'
    [0x01, 0x09, 0xF2, 0x10, 0x00], // '+'
    [0x00, 0x00, 0x03, 0x18, 0x88], // ','
    [0x00, 0x01, 0xF0, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x18, 0xC0], // '.'
    [0x00, 0x44, 0x44, 0x40, 0x00], // '/'
    [0x74, 0x67, 0x5C, 0xC5, 0xC0], // '0'
    [0x23, 0x08, 0x42, 0x11, 0xC0], // '1'
    [0x74, 0x42, 0xE8, 0x43, 0xE0], // '2'
    [0xF8, 0x44, 0x60, 0xC5, 0xC0], // '3'
    [0x11, 0x95, 0x2F, 0x88, 0x40], // '4'
    [0xFC, 0x3C, 0x10, 0xC5, 0xC0], // '5'
    [0x3A, 0x21, 0xE8, 0xC5, 0xC0], // '6'
    [0xF8, 0x42, 0x22, 0x22, 0x00], // '7'
    [0x74, 0x62, 0xE8, 0xC5, 0xC0], // '8'
    [0x74, 0x62, 0xF0, 0x8B, 0x80], // '9'
    [0x00, 0x08, 0x02, 0x00, 0x00], // ':'
    [0x00, 0x08, 0x02, 0x11, 0x00], // ';'
    [0x08, 0x88, 0x82, 0x08, 0x20], // '<'
    [0x00, 0x3E, 0x0F, 0x80, 0x00], // '='
    [0x41, 0x04, 0x11, 0x11, 0x00], // '>'
    [0x74, 0x42, 0x62, 0x00, 0x80], // '?'
    [0x74, 0x6B, 0x7B, 0x41, 0xE0], // '@'
    [0x22, 0xA3, 0x1F, 0xC6, 0x20], // 'A'
    [0xF4, 0x63, 0xE8, 0xC7, 0xC0], // 'B'
    [0x74, 0x61, 0x08, 0x45, 0xC0], // 'C'
    [0xF4, 0x63, 0x18, 0xC7, 0xC0], // 'D'
    [0xFC, 0x21, 0xE8, 0x43, 0xE0], // 'E'
    [0xFC, 0x21, 0xE8, 0x42, 0x00], // 'F'
    [0x7C, 0x61, 0x09, 0xC5, 0xE0], // 'G'
    [0x8C, 0x63, 0xF8, 0xC6, 0x20], // 'H'
    [0x71, 0x08, 0x42, 0x11, 0xC0], // 'I'
    [0x38, 0x84, 0x21, 0x49, 0x80], // 'J'
    [0x8C, 0xA9, 0x8A, 0x4A, 0x20], // 'K'
    [0x84, 0x21, 0x08, 0x43, 0xE0], // 'L'
    [0x8E, 0xEB, 0x5A, 0xC6, 0x20], // 'M'
    [0x8C, 0x73, 0x59, 0xC6, 0x20], // 'N'
    [0x74, 0x63, 0x18, 0xC5, 0xC0], // 'O'
    [0xF4, 0x63, 0xE8, 0x42, 0x00], // 'P'
    [0x74, 0x63, 0x1A, 0xC9, 0xA0], // 'Q'
    [0xF4, 0x63, 0xEA, 0x4A, 0x20], // 'R'
    [0x74, 0x60, 0xE0, 0xC5, 0xC0], // 'S'
    [0xFD, 0x48, 0x42, 0x10, 0x80], // 'T'
    [0x8C, 0x63, 0x18, 0xC5, 0xC0], // 'U'
    [0x8C, 0x63, 0x18, 0xA8, 0x80], // 'V'
    [0x8C, 0x63, 0x5A, 0xD5, 0x40], // 'W'
    [0x8C, 0x54, 0x45, 0x46, 0x20], // 'X'
    [0x8C, 0x54, 0x42, 0x10, 0x80], // 'Y'
    [0xF8, 0x44, 0xE4, 0x43, 0xE0], // 'Z'
    [0x7A, 0x10, 0x84, 0x21, 0xE0], // '['
    [0x04, 0x10, 0x41, 0x04, 0x00], // '\\'
    [0x78, 0x42, 0x10, 0x85, 0xE0], // ']'
    [0x22, 0xA2, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x03, 0xE0], // '_'
    [0x63, 0x08, 0x20, 0x00, 0x00], // '`'
    [0x00, 0x18, 0x27, 0x49, 0xE0], // 'a'
    [0x84, 0x2D, 0x98, 0xE6, 0xC0], // 'b'
    [0x00, 0x1D, 0x18, 0x45, 0xC0], // 'c'
    [0x08, 0x5B, 0x38, 0xCD, 0xA0], // 'd'
    [0x00, 0x1D, 0x1F, 0xC1, 0xC0], // 'e'
    [0x11, 0x48, 0xE2, 0x10, 0x80], // 'f'
    [0x00, 0x1D, 0x39, 0xB4, 0x2E], // 'g'
    [0x84, 0x2D, 0x98, 0xC6, 0x20], // 'h'
    [0x20, 0x18, 0x42, 0x11, 0xC0], // 'i'
    [0x10, 0x04, 0x21, 0x49, 0x80], // 'j'
    [0x84, 0x25, 0x4C, 0x52, 0x40], // 'k'
    [0x61, 0x08, 0x42, 0x11, 0xC0], // 'l'
    [0x00, 0x35, 0x5A, 0xD6, 0xA0], // 'm'
    [0x00, 0x2D, 0x98, 0xC6, 0x20], // 'n'
    [0x00, 0x1D, 0x18, 0xC5, 0xC0], // 'o'
    [0x00, 0x2D, 0x9C, 0xDA, 0x10], // 'p'
    [0x00, 0x1B, 0x39, 0xB4, 0x21], // 'q'
    [0x00, 0x2D, 0x98, 0x42, 0x00], // 'r'
    [0x00, 0x1F, 0x07, 0x07, 0xC0], // 's'
    [0x21, 0x3E, 0x42, 0x14, 0x40], // 't'
    [0x00, 0x23, 0x18, 0xCD, 0xA0], // 'u'
    [0x00, 0x23, 0x18, 0xA8, 0x80], // 'v'
    [0x00, 0x23, 0x1A, 0xD5, 0x40], // 'w'
    [0x00, 0x22, 0xA2, 0x2A, 0x20], // 'x'
    [0x00, 0x23, 0x17, 0x86, 0x2E], // 'y'
    [0x00, 0x3E, 0x22, 0x23, 0xE0], // 'z'
    [0x11, 0x08, 0x82, 0x10, 0x40], // '{'
    [0x21, 0x08, 0x02, 0x10, 0x80], // '|'
    [0x41, 0x08, 0x22, 0x11, 0x00], // '}'
    [0x45, 0x44, 0x00, 0x00, 0x00], // '~'
];

/// 7x12 glyphs, widened from the 5x8 set.
pub(super) const LG: [[u32; 3]; GLYPH_COUNT] = [
    [0x0000000, 0x0000000, 0x0000000], // ' '
    [0x183060C, 0x183060C, 0x0030600], // '!'
    [0x2448912, 0x2400000, 0x0000000], // '"'
    [0x244897F, 0xFE4BFFF, 0x2448900], // '#'
    [0x1830FEC, 0xD87868D, 0xFC30600], // '$'
    [0xE1C3882, 0x0430810, 0xC60C180], // '%'
    [0x204366C, 0xD8436ED, 0xC474E80], // '&'
    [0x1C3870C, 0x1840000, 0x0000000], // '\''
    [0x0408610, 0x2040810, 0x1808100], // '('
    [0x2040602, 0x0408102, 0x1840800], // ')'
    [0x183369E, 0x3DFCF1E, 0xDA30600], // '*'
    [0x000060C, 0x19FC60C, 0x1800000], // '+'
    [0x0000000, 0x000070E, 0x1C30610], // ','
    [0x0000000, 0x01FC000, 0x0000000], // '-'
    [0x0000000, 0x0000000, 0x1C38700], // '.'
    [0x0000082, 0x0430810, 0xC000000], // '/'
    [0x3C7B0E3, 0xC7B78F1, 0xC278F00], // '0'
    [0x1830E0C, 0x183060C, 0x1878F00], // '1'
    [0x3C7B081, 0x027B060, 0xC1FFF80], // '2'
    [0xFFFC082, 0x0438081, 0xC278F00], // '3'
    [0x0408712, 0x258BFFF, 0x0408100], // '4'
    [0xFFFF07E, 0xFC04081, 0xC278F00], // '5'
    [0x1E3C860, 0xC1FB0E1, 0xC278F00], // '6'
    [0xFFFC081, 0x020860C, 0x2183000], // '7'
    [0x3C7B0E1, 0xC27B0E1, 0xC278F00], // '8'
    [0x3C7B0E1, 0xC27C081, 0x05F3E00], // '9'
    [0x000000C, 0x180060C, 0x0000000], // ':'
    [0x000000C, 0x180060C, 0x1840800], // ';'
    [0x020410C, 0x184060C, 0x0404080], // '<'
    [0x000007F, 0xFE03FFF, 0x0000000], // '='
    [0x2040602, 0x0404102, 0x1840800], // '>'
    [0x3C7B081, 0x023860C, 0x0030600], // '?'
    [0x3C7B0ED, 0xDBBF76E, 0xC07CF80], // '@'
    [0x1830961, 0xC387FFF, 0xC387080], // 'A'
    [0xFDFB0E1, 0xC3FB0E1, 0xC3FBF00], // 'B'
    [0x3C7B0E0, 0xC183060, 0xC278F00], // 'C'
    [0xFDFB0E1, 0xC3870E1, 0xC3FBF00], // 'D'
    [0xFFFF060, 0xC1FB060, 0xC1FFF80], // 'E'
    [0xFFFF060, 0xC1FB060, 0xC183000], // 'F'
    [0x3E7F0E0, 0xC1831E3, 0xC27CF80], // 'G'
    [0xC3870E1, 0xC3FF0E1, 0xC387080], // 'H'
    [0x3C7860C, 0x183060C, 0x1878F00], // 'I'
    [0x1E3C102, 0x0408102, 0xC470E00], // 'J'
    [0xC38716C, 0xD9C366C, 0xC587080], // 'K'
    [0xC183060, 0xC183060, 0xC1FFF80], // 'L'
    [0xC3879ED, 0xDBB76ED, 0xC387080], // 'M'
    [0xC3870F1, 0xE3B71E3, 0xC387080], // 'N'
    [0x3C7B0E1, 0xC3870E1, 0xC278F00], // 'O'
    [0xFDFB0E1, 0xC3FB060, 0xC183000], // 'P'
    [0x3C7B0E1, 0xC3876ED, 0xC474E80], // 'Q'
    [0xFDFB0E1, 0xC3FB66C, 0xC587080], // 'R'
    [0x3C7B0E0, 0xC078081, 0xC278F00], // 'S'
    [0xFFFF68C, 0x183060C, 0x1830600], // 'T'
    [0xC3870E1, 0xC3870E1, 0xC278F00], // 'U'
    [0xC3870E1, 0xC3870E1, 0x2430600], // 'V'
    [0xC3870E1, 0xC3B76ED, 0xDA48900], // 'W'
    [0xC387092, 0x2430912, 0xC387080], // 'X'
    [0xC387092, 0x243060C, 0x1830600], // 'Y'
    [0xFFFC082, 0x0478810, 0xC1FFF80], // 'Z'
    [0x3E7C810, 0x2040810, 0x207CF80], // '['
    [0x0003010, 0x2030102, 0x0200000], // '\\'
    [0x3E7C081, 0x0204081, 0x027CF80], // ']'
    [0x1830961, 0xC200000, 0x0000000], // '^'
    [0x0000000, 0x0000000, 0x01FFF80], // '_'
    [0x3870E0C, 0x1808000, 0x0000000], // '`'
    [0x000001C, 0x3808F1E, 0xC47CF80], // 'a'
    [0xC18306E, 0xDDC70E1, 0xE3BB700], // 'b'
    [0x000001E, 0x3D87060, 0xC278F00], // 'c'
    [0x020409D, 0x3B8F0E1, 0xC674E80], // 'd'
    [0x000001E, 0x3D87FFF, 0xC078F00], // 'e'
    [0x040868C, 0x187860C, 0x1830600], // 'f'
    [0x000001E, 0x3D8F1E3, 0x3A0409E], // 'g'
    [0xC18306E, 0xDDC70E1, 0xC387080], // 'h'
    [0x183001C, 0x383060C, 0x1878F00], // 'i'
    [0x0408002, 0x0408102, 0xC470E00], // 'j'
    [0xC183062, 0xC5B3870, 0xD98B100], // 'k'
    [0x387060C, 0x183060C, 0x1878F00], // 'l'
    [0x0000072, 0xE5B76ED, 0xDBB7680], // 'm'
    [0x000006E, 0xDDC70E1, 0xC387080], // 'n'
    [0x000001E, 0x3D870E1, 0xC278F00], // 'o'
    [0x000006E, 0xDDC78F1, 0xDD83060], // 'p'
    [0x000001D, 0x3B8F1E3, 0x3A04081], // 'q'
    [0x000006E, 0xDDC7060, 0xC183000], // 'r'
    [0x000001F, 0x3F80F1E, 0x03FBF00], // 's'
    [0x183067F, 0xFE3060C, 0x1A08100], // 't'
    [0x0000061, 0xC3870E1, 0xC674E80], // 'u'
    [0x0000061, 0xC3870E1, 0x2430600], // 'v'
    [0x0000061, 0xC3876ED, 0xDA48900], // 'w'
    [0x0000061, 0xC24860C, 0x2587080], // 'x'
    [0x0000061, 0xC384F9F, 0x038709E], // 'y'
    [0x000007F, 0xFE0860C, 0x21FFF80], // 'z'
    [0x040860C, 0x184060C, 0x1808100], // '{'
    [0x183060C, 0x180060C, 0x1830600], // '|'
    [0x204060C, 0x180860C, 0x1840800], // '}'
    [0x2043682, 0x0400000, 0x0000000], // '~'
];
