//! Static geodesic dome layout: vertex positions and strut endpoints.
//!
//! Vertex coordinates are in design units as measured off the dome plan;
//! [`super::dome::to_screen`] maps them into the 750x750 preview frame.
//! Vertices run in concentric rings from the rim inwards; the final vertex
//! is the apex at the centre of the dome.

/// Index of the apex vertex used as the projection centre
pub const CENTER_VERTEX: usize = 70;

pub const VERTICES: [[i32; 2]; 71] = [
    [395, 86], [477, 107], [545, 157], [591, 229], [623, 319],
    [627, 404], [599, 484], [546, 551], [471, 606], [390, 637],
    [304, 637], [226, 605], [149, 551], [95, 485], [70, 403],
    [74, 319], [103, 229], [149, 157], [218, 107], [299, 87],
    [348, 139], [425, 149], [487, 165], [524, 219], [555, 290],
    [572, 366], [575, 431], [535, 482], [477, 534], [409, 574],
    [348, 595], [286, 573], [220, 536], [163, 483], [123, 431],
    [125, 366], [141, 292], [172, 220], [209, 166], [270, 148],
    [386, 199], [456, 210], [487, 272], [511, 346], [523, 414],
    [473, 463], [410, 509], [348, 541], [286, 509], [223, 464],
    [173, 415], [185, 347], [209, 273], [240, 209], [310, 199],
    [348, 259], [418, 262], [442, 327], [461, 394], [406, 437],
    [348, 476], [290, 438], [236, 394], [253, 327], [278, 262],
    [379, 314], [400, 375], [349, 412], [297, 375], [316, 314],
    [348, 358],
];

/// Strut endpoints as `[start, end]` vertex indices; LEDs run start to end
pub const STRUTS: [[usize; 2]; 190] = [
    [0, 1], [1, 2], [3, 2], [3, 4], [4, 5], [5, 6],
    [7, 6], [7, 8], [8, 9], [9, 10], [11, 10], [11, 12],
    [12, 13], [13, 14], [15, 14], [15, 16], [16, 17], [17, 18],
    [19, 18], [19, 0], [20, 21], [22, 21], [23, 22], [24, 23],
    [24, 25], [26, 25], [27, 26], [28, 27], [28, 29], [30, 29],
    [31, 30], [32, 31], [32, 33], [34, 33], [35, 34], [36, 35],
    [36, 37], [38, 37], [39, 38], [20, 39], [41, 40], [42, 41],
    [43, 42], [44, 43], [45, 44], [46, 45], [47, 46], [48, 47],
    [49, 48], [50, 49], [51, 50], [52, 51], [53, 52], [54, 53],
    [40, 54], [56, 55], [57, 56], [58, 57], [59, 58], [60, 59],
    [61, 60], [62, 61], [63, 62], [64, 63], [55, 64], [65, 66],
    [66, 67], [67, 68], [68, 69], [69, 65], [20, 0], [0, 21],
    [21, 1], [1, 22], [2, 22], [23, 2], [23, 3], [24, 3],
    [24, 4], [4, 25], [25, 5], [5, 26], [6, 26], [27, 6],
    [27, 7], [28, 7], [28, 8], [8, 29], [29, 9], [9, 30],
    [10, 30], [31, 10], [31, 11], [32, 11], [32, 12], [12, 33],
    [33, 13], [13, 34], [14, 34], [35, 14], [35, 15], [36, 15],
    [36, 16], [16, 37], [37, 17], [17, 38], [18, 38], [39, 18],
    [39, 19], [20, 19], [20, 40], [21, 40], [21, 41], [22, 41],
    [41, 23], [42, 23], [24, 42], [24, 43], [25, 43], [25, 44],
    [26, 44], [44, 27], [45, 27], [28, 45], [28, 46], [29, 46],
    [29, 47], [30, 47], [47, 31], [48, 31], [32, 48], [32, 49],
    [33, 49], [33, 50], [34, 50], [50, 35], [51, 35], [36, 51],
    [36, 52], [37, 52], [37, 53], [38, 53], [53, 39], [54, 39],
    [20, 54], [40, 55], [40, 56], [41, 56], [56, 42], [42, 57],
    [43, 57], [43, 58], [44, 58], [58, 45], [45, 59], [46, 59],
    [46, 60], [47, 60], [60, 48], [48, 61], [49, 61], [49, 62],
    [50, 62], [62, 51], [51, 63], [52, 63], [52, 64], [53, 64],
    [64, 54], [54, 55], [55, 65], [56, 65], [57, 65], [57, 66],
    [58, 66], [59, 66], [59, 67], [60, 67], [61, 67], [61, 68],
    [62, 68], [63, 68], [63, 69], [64, 69], [55, 69], [65, 70],
    [66, 70], [67, 70], [68, 70], [69, 70],
];
