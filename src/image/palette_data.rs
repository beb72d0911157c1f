//! Glowbow 调色板数据
//! 用于 Lepton 8 位 AGC 索引图像: 暗 -> 红 -> 橙 -> 黄 -> 白, 224 之后为灰度段

use super::Color;

/// Glowbow 调色板 (256 项, 按索引排列)
pub const GLOWBOW_PALETTE: [Color; 256] = [
    Color { r: 16,  g: 16,  b: 16  }, // index 0:   #101010
    Color { r: 19,  g: 17,  b: 18  }, // index 1:   #131112
    Color { r: 22,  g: 16,  b: 16  }, // index 2:   #161010
    Color { r: 25,  g: 17,  b: 18  }, // index 3:   #191112
    Color { r: 28,  g: 17,  b: 19  }, // index 4:   #1C1113
    Color { r: 31,  g: 17,  b: 20  }, // index 5:   #1F1114
    Color { r: 34,  g: 17,  b: 19  }, // index 6:   #221113
    Color { r: 36,  g: 18,  b: 20  }, // index 7:   #241214
    Color { r: 39,  g: 18,  b: 19  }, // index 8:   #271213
    Color { r: 43,  g: 19,  b: 21  }, // index 9:   #2B1315
    Color { r: 45,  g: 18,  b: 21  }, // index 10:  #2D1215
    Color { r: 48,  g: 20,  b: 21  }, // index 11:  #301415
    Color { r: 52,  g: 19,  b: 22  }, // index 12:  #341316
    Color { r: 54,  g: 20,  b: 23  }, // index 13:  #361417
    Color { r: 58,  g: 20,  b: 23  }, // index 14:  #3A1417
    Color { r: 63,  g: 21,  b: 23  }, // index 15:  #3F1517
    Color { r: 68,  g: 21,  b: 25  }, // index 16:  #441519
    Color { r: 70,  g: 21,  b: 26  }, // index 17:  #46151A
    Color { r: 73,  g: 22,  b: 27  }, // index 18:  #49161B
    Color { r: 75,  g: 22,  b: 26  }, // index 19:  #4B161A
    Color { r: 79,  g: 22,  b: 27  }, // index 20:  #4F161B
    Color { r: 81,  g: 22,  b: 28  }, // index 21:  #51161C
    Color { r: 84,  g: 23,  b: 27  }, // index 22:  #54171B
    Color { r: 87,  g: 22,  b: 28  }, // index 23:  #57161C
    Color { r: 91,  g: 24,  b: 30  }, // index 24:  #5B181E
    Color { r: 96,  g: 23,  b: 30  }, // index 25:  #60171E
    Color { r: 102, g: 24,  b: 33  }, // index 26:  #661821
    Color { r: 104, g: 25,  b: 32  }, // index 27:  #681920
    Color { r: 108, g: 25,  b: 33  }, // index 28:  #6C1921
    Color { r: 110, g: 25,  b: 34  }, // index 29:  #6E1922
    Color { r: 117, g: 25,  b: 34  }, // index 30:  #751922
    Color { r: 120, g: 27,  b: 34  }, // index 31:  #781B22
    Color { r: 122, g: 27,  b: 35  }, // index 32:  #7A1B23
    Color { r: 127, g: 28,  b: 35  }, // index 33:  #7F1C23
    Color { r: 129, g: 27,  b: 35  }, // index 34:  #811B23
    Color { r: 132, g: 29,  b: 37  }, // index 35:  #841D25
    Color { r: 135, g: 27,  b: 37  }, // index 36:  #871B25
    Color { r: 138, g: 29,  b: 38  }, // index 37:  #8A1D26
    Color { r: 141, g: 29,  b: 39  }, // index 38:  #8D1D27
    Color { r: 143, g: 29,  b: 40  }, // index 39:  #8F1D28
    Color { r: 147, g: 29,  b: 41  }, // index 40:  #931D29
    Color { r: 150, g: 31,  b: 41  }, // index 41:  #961F29
    Color { r: 152, g: 30,  b: 41  }, // index 42:  #981E29
    Color { r: 155, g: 29,  b: 42  }, // index 43:  #9B1D2A
    Color { r: 158, g: 30,  b: 41  }, // index 44:  #9E1E29
    Color { r: 165, g: 31,  b: 44  }, // index 45:  #A51F2C
    Color { r: 167, g: 32,  b: 43  }, // index 46:  #A7202B
    Color { r: 170, g: 32,  b: 44  }, // index 47:  #AA202C
    Color { r: 175, g: 33,  b: 45  }, // index 48:  #AF212D
    Color { r: 177, g: 33,  b: 46  }, // index 49:  #B1212E
    Color { r: 178, g: 32,  b: 46  }, // index 50:  #B2202E
    Color { r: 182, g: 32,  b: 45  }, // index 51:  #B6202D
    Color { r: 186, g: 33,  b: 47  }, // index 52:  #BA212F
    Color { r: 188, g: 34,  b: 48  }, // index 53:  #BC2230
    Color { r: 190, g: 34,  b: 47  }, // index 54:  #BE222F
    Color { r: 194, g: 34,  b: 48  }, // index 55:  #C22230
    Color { r: 195, g: 35,  b: 49  }, // index 56:  #C32331
    Color { r: 195, g: 35,  b: 47  }, // index 57:  #C3232F
    Color { r: 197, g: 38,  b: 48  }, // index 58:  #C52630
    Color { r: 196, g: 39,  b: 46  }, // index 59:  #C4272E
    Color { r: 198, g: 39,  b: 45  }, // index 60:  #C6272D
    Color { r: 199, g: 41,  b: 44  }, // index 61:  #C7292C
    Color { r: 200, g: 42,  b: 43  }, // index 62:  #C82A2B
    Color { r: 201, g: 43,  b: 43  }, // index 63:  #C92B2B
    Color { r: 200, g: 44,  b: 41  }, // index 64:  #C82C29
    Color { r: 201, g: 45,  b: 42  }, // index 65:  #C92D2A
    Color { r: 203, g: 46,  b: 41  }, // index 66:  #CB2E29
    Color { r: 204, g: 47,  b: 42  }, // index 67:  #CC2F2A
    Color { r: 204, g: 47,  b: 40  }, // index 68:  #CC2F28
    Color { r: 205, g: 49,  b: 40  }, // index 69:  #CD3128
    Color { r: 205, g: 49,  b: 38  }, // index 70:  #CD3126
    Color { r: 206, g: 52,  b: 38  }, // index 71:  #CE3426
    Color { r: 207, g: 52,  b: 36  }, // index 72:  #CF3424
    Color { r: 208, g: 53,  b: 37  }, // index 73:  #D03525
    Color { r: 209, g: 54,  b: 36  }, // index 74:  #D13624
    Color { r: 210, g: 55,  b: 36  }, // index 75:  #D23724
    Color { r: 210, g: 58,  b: 35  }, // index 76:  #D23A23
    Color { r: 211, g: 59,  b: 34  }, // index 77:  #D33B22
    Color { r: 212, g: 60,  b: 33  }, // index 78:  #D43C21
    Color { r: 213, g: 60,  b: 33  }, // index 79:  #D53C21
    Color { r: 214, g: 61,  b: 33  }, // index 80:  #D63D21
    Color { r: 213, g: 62,  b: 31  }, // index 81:  #D53E1F
    Color { r: 215, g: 64,  b: 33  }, // index 82:  #D74021
    Color { r: 215, g: 64,  b: 31  }, // index 83:  #D7401F
    Color { r: 216, g: 66,  b: 30  }, // index 84:  #D8421E
    Color { r: 218, g: 66,  b: 30  }, // index 85:  #DA421E
    Color { r: 218, g: 66,  b: 30  }, // index 86:  #DA421E
    Color { r: 218, g: 68,  b: 29  }, // index 87:  #DA441D
    Color { r: 219, g: 70,  b: 28  }, // index 88:  #DB461C
    Color { r: 220, g: 69,  b: 28  }, // index 89:  #DC451C
    Color { r: 221, g: 72,  b: 26  }, // index 90:  #DD481A
    Color { r: 223, g: 73,  b: 26  }, // index 91:  #DF491A
    Color { r: 222, g: 74,  b: 24  }, // index 92:  #DE4A18
    Color { r: 223, g: 75,  b: 25  }, // index 93:  #DF4B19
    Color { r: 224, g: 76,  b: 24  }, // index 94:  #E04C18
    Color { r: 225, g: 78,  b: 23  }, // index 95:  #E14E17
    Color { r: 225, g: 78,  b: 22  }, // index 96:  #E14E16
    Color { r: 226, g: 79,  b: 23  }, // index 97:  #E24F17
    Color { r: 227, g: 80,  b: 22  }, // index 98:  #E35016
    Color { r: 227, g: 81,  b: 20  }, // index 99:  #E35114
    Color { r: 228, g: 82,  b: 21  }, // index 100: #E45215
    Color { r: 229, g: 83,  b: 20  }, // index 101: #E55314
    Color { r: 230, g: 83,  b: 18  }, // index 102: #E65312
    Color { r: 231, g: 86,  b: 19  }, // index 103: #E75613
    Color { r: 231, g: 86,  b: 17  }, // index 104: #E75611
    Color { r: 232, g: 87,  b: 16  }, // index 105: #E85710
    Color { r: 233, g: 88,  b: 17  }, // index 106: #E95811
    Color { r: 234, g: 90,  b: 16  }, // index 107: #EA5A10
    Color { r: 235, g: 91,  b: 14  }, // index 108: #EB5B0E
    Color { r: 235, g: 91,  b: 14  }, // index 109: #EB5B0E
    Color { r: 236, g: 93,  b: 13  }, // index 110: #EC5D0D
    Color { r: 237, g: 94,  b: 12  }, // index 111: #ED5E0C
    Color { r: 236, g: 96,  b: 13  }, // index 112: #EC600D
    Color { r: 237, g: 97,  b: 13  }, // index 113: #ED610D
    Color { r: 237, g: 99,  b: 14  }, // index 114: #ED630E
    Color { r: 237, g: 101, b: 13  }, // index 115: #ED650D
    Color { r: 236, g: 103, b: 12  }, // index 116: #EC670C
    Color { r: 236, g: 105, b: 13  }, // index 117: #EC690D
    Color { r: 237, g: 106, b: 12  }, // index 118: #ED6A0C
    Color { r: 236, g: 108, b: 11  }, // index 119: #EC6C0B
    Color { r: 236, g: 112, b: 12  }, // index 120: #EC700C
    Color { r: 237, g: 113, b: 13  }, // index 121: #ED710D
    Color { r: 236, g: 115, b: 12  }, // index 122: #EC730C
    Color { r: 236, g: 117, b: 13  }, // index 123: #EC750D
    Color { r: 235, g: 119, b: 12  }, // index 124: #EB770C
    Color { r: 236, g: 122, b: 12  }, // index 125: #EC7A0C
    Color { r: 237, g: 123, b: 13  }, // index 126: #ED7B0D
    Color { r: 237, g: 125, b: 13  }, // index 127: #ED7D0D
    Color { r: 236, g: 127, b: 12  }, // index 128: #EC7F0C
    Color { r: 236, g: 129, b: 13  }, // index 129: #EC810D
    Color { r: 237, g: 130, b: 12  }, // index 130: #ED820C
    Color { r: 236, g: 132, b: 13  }, // index 131: #EC840D
    Color { r: 236, g: 134, b: 12  }, // index 132: #EC860C
    Color { r: 237, g: 135, b: 12  }, // index 133: #ED870C
    Color { r: 237, g: 137, b: 13  }, // index 134: #ED890D
    Color { r: 237, g: 142, b: 12  }, // index 135: #ED8E0C
    Color { r: 236, g: 144, b: 13  }, // index 136: #EC900D
    Color { r: 236, g: 146, b: 12  }, // index 137: #EC920C
    Color { r: 237, g: 147, b: 13  }, // index 138: #ED930D
    Color { r: 237, g: 149, b: 12  }, // index 139: #ED950C
    Color { r: 236, g: 151, b: 13  }, // index 140: #EC970D
    Color { r: 237, g: 152, b: 13  }, // index 141: #ED980D
    Color { r: 237, g: 154, b: 12  }, // index 142: #ED9A0C
    Color { r: 236, g: 156, b: 13  }, // index 143: #EC9C0D
    Color { r: 236, g: 158, b: 12  }, // index 144: #EC9E0C
    Color { r: 236, g: 160, b: 11  }, // index 145: #ECA00B
    Color { r: 235, g: 161, b: 12  }, // index 146: #EBA10C
    Color { r: 236, g: 163, b: 12  }, // index 147: #ECA30C
    Color { r: 236, g: 165, b: 13  }, // index 148: #ECA50D
    Color { r: 235, g: 167, b: 12  }, // index 149: #EBA70C
    Color { r: 236, g: 170, b: 12  }, // index 150: #ECAA0C
    Color { r: 236, g: 172, b: 11  }, // index 151: #ECAC0B
    Color { r: 235, g: 173, b: 12  }, // index 152: #EBAD0C
    Color { r: 236, g: 176, b: 12  }, // index 153: #ECB00C
    Color { r: 235, g: 179, b: 12  }, // index 154: #EBB30C
    Color { r: 236, g: 180, b: 13  }, // index 155: #ECB40D
    Color { r: 236, g: 182, b: 12  }, // index 156: #ECB60C
    Color { r: 236, g: 184, b: 11  }, // index 157: #ECB80B
    Color { r: 237, g: 185, b: 12  }, // index 158: #EDB90C
    Color { r: 236, g: 187, b: 11  }, // index 159: #ECBB0B
    Color { r: 236, g: 188, b: 12  }, // index 160: #ECBC0C
    Color { r: 235, g: 190, b: 12  }, // index 161: #EBBE0C
    Color { r: 236, g: 191, b: 13  }, // index 162: #ECBF0D
    Color { r: 235, g: 194, b: 12  }, // index 163: #EBC20C
    Color { r: 236, g: 196, b: 11  }, // index 164: #ECC40B
    Color { r: 235, g: 199, b: 11  }, // index 165: #EBC70B
    Color { r: 236, g: 201, b: 11  }, // index 166: #ECC90B
    Color { r: 235, g: 202, b: 12  }, // index 167: #EBCA0C
    Color { r: 235, g: 204, b: 14  }, // index 168: #EBCC0E
    Color { r: 236, g: 204, b: 19  }, // index 169: #ECCC13
    Color { r: 236, g: 205, b: 23  }, // index 170: #ECCD17
    Color { r: 236, g: 204, b: 27  }, // index 171: #ECCC1B
    Color { r: 235, g: 206, b: 30  }, // index 172: #EBCE1E
    Color { r: 236, g: 206, b: 34  }, // index 173: #ECCE22
    Color { r: 236, g: 207, b: 37  }, // index 174: #ECCF25
    Color { r: 236, g: 207, b: 41  }, // index 175: #ECCF29
    Color { r: 235, g: 208, b: 45  }, // index 176: #EBD02D
    Color { r: 236, g: 208, b: 48  }, // index 177: #ECD030
    Color { r: 236, g: 209, b: 52  }, // index 178: #ECD134
    Color { r: 236, g: 209, b: 56  }, // index 179: #ECD138
    Color { r: 235, g: 211, b: 65  }, // index 180: #EBD341
    Color { r: 236, g: 212, b: 68  }, // index 181: #ECD444
    Color { r: 235, g: 212, b: 71  }, // index 182: #EBD447
    Color { r: 236, g: 212, b: 74  }, // index 183: #ECD44A
    Color { r: 234, g: 212, b: 78  }, // index 184: #EAD44E
    Color { r: 235, g: 213, b: 82  }, // index 185: #EBD552
    Color { r: 235, g: 214, b: 87  }, // index 186: #EBD657
    Color { r: 236, g: 214, b: 91  }, // index 187: #ECD65B
    Color { r: 236, g: 215, b: 94  }, // index 188: #ECD75E
    Color { r: 235, g: 217, b: 97  }, // index 189: #EBD961
    Color { r: 235, g: 216, b: 100 }, // index 190: #EBD864
    Color { r: 235, g: 217, b: 105 }, // index 191: #EBD969
    Color { r: 235, g: 216, b: 108 }, // index 192: #EBD86C
    Color { r: 234, g: 218, b: 111 }, // index 193: #EADA6F
    Color { r: 235, g: 218, b: 116 }, // index 194: #EBDA74
    Color { r: 235, g: 219, b: 122 }, // index 195: #EBDB7A
    Color { r: 235, g: 220, b: 127 }, // index 196: #EBDC7F
    Color { r: 236, g: 220, b: 131 }, // index 197: #ECDC83
    Color { r: 235, g: 221, b: 134 }, // index 198: #EBDD86
    Color { r: 235, g: 221, b: 138 }, // index 199: #EBDD8A
    Color { r: 235, g: 222, b: 142 }, // index 200: #EBDE8E
    Color { r: 235, g: 221, b: 146 }, // index 201: #EBDD92
    Color { r: 234, g: 222, b: 148 }, // index 202: #EADE94
    Color { r: 235, g: 223, b: 153 }, // index 203: #EBDF99
    Color { r: 235, g: 224, b: 157 }, // index 204: #EBE09D
    Color { r: 235, g: 225, b: 160 }, // index 205: #EBE1A0
    Color { r: 236, g: 225, b: 165 }, // index 206: #ECE1A5
    Color { r: 234, g: 225, b: 168 }, // index 207: #EAE1A8
    Color { r: 235, g: 226, b: 171 }, // index 208: #EBE2AB
    Color { r: 235, g: 225, b: 175 }, // index 209: #EBE1AF
    Color { r: 236, g: 227, b: 182 }, // index 210: #ECE3B6
    Color { r: 235, g: 228, b: 187 }, // index 211: #EBE4BB
    Color { r: 234, g: 228, b: 190 }, // index 212: #EAE4BE
    Color { r: 234, g: 229, b: 195 }, // index 213: #EAE5C3
    Color { r: 235, g: 230, b: 197 }, // index 214: #EBE6C5
    Color { r: 236, g: 230, b: 202 }, // index 215: #ECE6CA
    Color { r: 234, g: 230, b: 205 }, // index 216: #EAE6CD
    Color { r: 235, g: 231, b: 208 }, // index 217: #EBE7D0
    Color { r: 235, g: 232, b: 213 }, // index 218: #EBE8D5
    Color { r: 235, g: 231, b: 216 }, // index 219: #EBE7D8
    Color { r: 234, g: 232, b: 219 }, // index 220: #EAE8DB
    Color { r: 234, g: 234, b: 224 }, // index 221: #EAEAE0
    Color { r: 235, g: 234, b: 228 }, // index 222: #EBEAE4
    Color { r: 235, g: 235, b: 235 }, // index 223: #EBEBEB
    Color { r: 16,  g: 16,  b: 16  }, // index 224: #101010
    Color { r: 17,  g: 17,  b: 17  }, // index 225: #111111
    Color { r: 18,  g: 18,  b: 18  }, // index 226: #121212
    Color { r: 19,  g: 19,  b: 19  }, // index 227: #131313
    Color { r: 20,  g: 20,  b: 20  }, // index 228: #141414
    Color { r: 21,  g: 21,  b: 21  }, // index 229: #151515
    Color { r: 22,  g: 22,  b: 22  }, // index 230: #161616
    Color { r: 23,  g: 23,  b: 23  }, // index 231: #171717
    Color { r: 24,  g: 24,  b: 24  }, // index 232: #181818
    Color { r: 25,  g: 25,  b: 25  }, // index 233: #191919
    Color { r: 26,  g: 26,  b: 26  }, // index 234: #1A1A1A
    Color { r: 27,  g: 27,  b: 27  }, // index 235: #1B1B1B
    Color { r: 28,  g: 28,  b: 28  }, // index 236: #1C1C1C
    Color { r: 29,  g: 29,  b: 29  }, // index 237: #1D1D1D
    Color { r: 30,  g: 30,  b: 30  }, // index 238: #1E1E1E
    Color { r: 31,  g: 31,  b: 31  }, // index 239: #1F1F1F
    Color { r: 32,  g: 32,  b: 32  }, // index 240: #202020
    Color { r: 33,  g: 33,  b: 33  }, // index 241: #212121
    Color { r: 34,  g: 34,  b: 34  }, // index 242: #222222
    Color { r: 35,  g: 35,  b: 35  }, // index 243: #232323
    Color { r: 36,  g: 36,  b: 36  }, // index 244: #242424
    Color { r: 37,  g: 37,  b: 37  }, // index 245: #252525
    Color { r: 38,  g: 38,  b: 38  }, // index 246: #262626
    Color { r: 39,  g: 39,  b: 39  }, // index 247: #272727
    Color { r: 40,  g: 40,  b: 40  }, // index 248: #282828
    Color { r: 41,  g: 41,  b: 41  }, // index 249: #292929
    Color { r: 42,  g: 42,  b: 42  }, // index 250: #2A2A2A
    Color { r: 43,  g: 43,  b: 43  }, // index 251: #2B2B2B
    Color { r: 44,  g: 44,  b: 44  }, // index 252: #2C2C2C
    Color { r: 44,  g: 44,  b: 44  }, // index 253: #2C2C2C
    Color { r: 45,  g: 45,  b: 45  }, // index 254: #2D2D2D
    Color { r: 46,  g: 46,  b: 46  }, // index 255: #2E2E2E
];

/// 快速查找表 (RGB565 格式的颜色值), 编译期生成
pub const GLOWBOW_RGB565: [u16; 256] = build_rgb565(&GLOWBOW_PALETTE);

const fn build_rgb565(palette: &[Color; 256]) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = palette[i].to_rgb565();
        i += 1;
    }
    table
}
