// Reference tables of the listed colormaps.
//
// viridis, plasma, magma and inferno by Stéfan van der Walt and
// Nathaniel Smith (https://github.com/BIDS/colormap, CC0); cividis by
// Jamie Nuñez, Christopher Anderton and Ryan Renslow (CC0); turbo
// Copyright 2019 Google LLC (Apache-2.0); coolwarm control points by
// Kenneth Moreland.  rocket, mako, flare, crest, vlag and icefire come
// from seaborn (BSD-3-Clause) and are stored as `0xRRGGBB`.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

/// `viridis`, 256 entries.
pub(crate) const VIRIDIS: [[f64; 3]; 256] = [
    [0.267004, 0.004874, 0.329415],
    [0.268510, 0.009605, 0.335427],
    [0.269944, 0.014625, 0.341379],
    [0.271305, 0.019942, 0.347269],
    [0.272594, 0.025563, 0.353093],
    [0.273809, 0.031497, 0.358853],
    [0.274952, 0.037752, 0.364543],
    [0.276022, 0.044167, 0.370164],
    [0.277018, 0.050344, 0.375715],
    [0.277941, 0.056324, 0.381191],
    [0.278791, 0.062145, 0.386592],
    [0.279566, 0.067836, 0.391917],
    [0.280267, 0.073417, 0.397163],
    [0.280894, 0.078907, 0.402329],
    [0.281446, 0.084320, 0.407414],
    [0.281924, 0.089666, 0.412415],
    [0.282327, 0.094955, 0.417331],
    [0.282656, 0.100196, 0.422160],
    [0.282910, 0.105393, 0.426902],
    [0.283091, 0.110553, 0.431554],
    [0.283197, 0.115680, 0.436115],
    [0.283229, 0.120777, 0.440584],
    [0.283187, 0.125848, 0.444960],
    [0.283072, 0.130895, 0.449241],
    [0.282884, 0.135920, 0.453427],
    [0.282623, 0.140926, 0.457517],
    [0.282290, 0.145912, 0.461510],
    [0.281887, 0.150881, 0.465405],
    [0.281412, 0.155834, 0.469201],
    [0.280868, 0.160771, 0.472899],
    [0.280255, 0.165693, 0.476498],
    [0.279574, 0.170599, 0.479997],
    [0.278826, 0.175490, 0.483397],
    [0.278012, 0.180367, 0.486697],
    [0.277134, 0.185228, 0.489898],
    [0.276194, 0.190074, 0.493001],
    [0.275191, 0.194905, 0.496005],
    [0.274128, 0.199721, 0.498911],
    [0.273006, 0.204520, 0.501721],
    [0.271828, 0.209303, 0.504434],
    [0.270595, 0.214069, 0.507052],
    [0.269308, 0.218818, 0.509577],
    [0.267968, 0.223549, 0.512008],
    [0.266580, 0.228262, 0.514349],
    [0.265145, 0.232956, 0.516599],
    [0.263663, 0.237631, 0.518762],
    [0.262138, 0.242286, 0.520837],
    [0.260571, 0.246922, 0.522828],
    [0.258965, 0.251537, 0.524736],
    [0.257322, 0.256130, 0.526563],
    [0.255645, 0.260703, 0.528312],
    [0.253935, 0.265254, 0.529983],
    [0.252194, 0.269783, 0.531579],
    [0.250425, 0.274290, 0.533103],
    [0.248629, 0.278775, 0.534556],
    [0.246811, 0.283237, 0.535941],
    [0.244972, 0.287675, 0.537260],
    [0.243113, 0.292092, 0.538516],
    [0.241237, 0.296485, 0.539709],
    [0.239346, 0.300855, 0.540844],
    [0.237441, 0.305202, 0.541921],
    [0.235526, 0.309527, 0.542944],
    [0.233603, 0.313828, 0.543914],
    [0.231674, 0.318106, 0.544834],
    [0.229739, 0.322361, 0.545706],
    [0.227802, 0.326594, 0.546532],
    [0.225863, 0.330805, 0.547314],
    [0.223925, 0.334994, 0.548053],
    [0.221989, 0.339161, 0.548752],
    [0.220057, 0.343307, 0.549413],
    [0.218130, 0.347432, 0.550038],
    [0.216210, 0.351535, 0.550627],
    [0.214298, 0.355619, 0.551184],
    [0.212395, 0.359683, 0.551710],
    [0.210503, 0.363727, 0.552206],
    [0.208623, 0.367752, 0.552675],
    [0.206756, 0.371758, 0.553117],
    [0.204903, 0.375746, 0.553533],
    [0.203063, 0.379716, 0.553925],
    [0.201239, 0.383670, 0.554294],
    [0.199430, 0.387607, 0.554642],
    [0.197636, 0.391528, 0.554969],
    [0.195860, 0.395433, 0.555276],
    [0.194100, 0.399323, 0.555565],
    [0.192357, 0.403199, 0.555836],
    [0.190631, 0.407061, 0.556089],
    [0.188923, 0.410910, 0.556326],
    [0.187231, 0.414746, 0.556547],
    [0.185556, 0.418570, 0.556753],
    [0.183898, 0.422383, 0.556944],
    [0.182256, 0.426184, 0.557120],
    [0.180629, 0.429975, 0.557282],
    [0.179019, 0.433756, 0.557430],
    [0.177423, 0.437527, 0.557565],
    [0.175841, 0.441290, 0.557685],
    [0.174274, 0.445044, 0.557792],
    [0.172719, 0.448791, 0.557885],
    [0.171176, 0.452530, 0.557965],
    [0.169646, 0.456262, 0.558030],
    [0.168126, 0.459988, 0.558082],
    [0.166617, 0.463708, 0.558119],
    [0.165117, 0.467423, 0.558141],
    [0.163625, 0.471133, 0.558148],
    [0.162142, 0.474838, 0.558140],
    [0.160665, 0.478540, 0.558115],
    [0.159194, 0.482237, 0.558073],
    [0.157729, 0.485932, 0.558013],
    [0.156270, 0.489624, 0.557936],
    [0.154815, 0.493313, 0.557840],
    [0.153364, 0.497000, 0.557724],
    [0.151918, 0.500685, 0.557587],
    [0.150476, 0.504369, 0.557430],
    [0.149039, 0.508051, 0.557250],
    [0.147607, 0.511733, 0.557049],
    [0.146180, 0.515413, 0.556823],
    [0.144759, 0.519093, 0.556572],
    [0.143343, 0.522773, 0.556295],
    [0.141935, 0.526453, 0.555991],
    [0.140536, 0.530132, 0.555659],
    [0.139147, 0.533812, 0.555298],
    [0.137770, 0.537492, 0.554906],
    [0.136408, 0.541173, 0.554483],
    [0.135066, 0.544853, 0.554029],
    [0.133743, 0.548535, 0.553541],
    [0.132444, 0.552216, 0.553018],
    [0.131172, 0.555899, 0.552459],
    [0.129933, 0.559582, 0.551864],
    [0.128729, 0.563265, 0.551229],
    [0.127568, 0.566949, 0.550556],
    [0.126453, 0.570633, 0.549841],
    [0.125394, 0.574318, 0.549086],
    [0.124395, 0.578002, 0.548287],
    [0.123463, 0.581687, 0.547445],
    [0.122606, 0.585371, 0.546557],
    [0.121831, 0.589055, 0.545623],
    [0.121148, 0.592739, 0.544641],
    [0.120565, 0.596422, 0.543611],
    [0.120092, 0.600104, 0.542530],
    [0.119738, 0.603785, 0.541400],
    [0.119512, 0.607464, 0.540218],
    [0.119423, 0.611141, 0.538982],
    [0.119483, 0.614817, 0.537692],
    [0.119699, 0.618490, 0.536347],
    [0.120081, 0.622161, 0.534946],
    [0.120638, 0.625828, 0.533488],
    [0.121380, 0.629492, 0.531973],
    [0.122312, 0.633153, 0.530398],
    [0.123444, 0.636809, 0.528763],
    [0.124780, 0.640461, 0.527068],
    [0.126326, 0.644107, 0.525311],
    [0.128087, 0.647749, 0.523491],
    [0.130067, 0.651384, 0.521608],
    [0.132268, 0.655014, 0.519661],
    [0.134692, 0.658636, 0.517649],
    [0.137339, 0.662252, 0.515571],
    [0.140210, 0.665859, 0.513427],
    [0.143303, 0.669459, 0.511215],
    [0.146616, 0.673050, 0.508936],
    [0.150148, 0.676631, 0.506589],
    [0.153894, 0.680203, 0.504172],
    [0.157851, 0.683765, 0.501686],
    [0.162016, 0.687316, 0.499129],
    [0.166383, 0.690856, 0.496502],
    [0.170948, 0.694384, 0.493803],
    [0.175707, 0.697900, 0.491033],
    [0.180653, 0.701402, 0.488189],
    [0.185783, 0.704891, 0.485273],
    [0.191090, 0.708366, 0.482284],
    [0.196571, 0.711827, 0.479221],
    [0.202219, 0.715272, 0.476084],
    [0.208030, 0.718701, 0.472873],
    [0.214000, 0.722114, 0.469588],
    [0.220124, 0.725509, 0.466226],
    [0.226397, 0.728888, 0.462789],
    [0.232815, 0.732247, 0.459277],
    [0.239374, 0.735588, 0.455688],
    [0.246070, 0.738910, 0.452024],
    [0.252899, 0.742211, 0.448284],
    [0.259857, 0.745492, 0.444467],
    [0.266941, 0.748751, 0.440573],
    [0.274149, 0.751988, 0.436601],
    [0.281477, 0.755203, 0.432552],
    [0.288921, 0.758394, 0.428426],
    [0.296479, 0.761561, 0.424223],
    [0.304148, 0.764704, 0.419943],
    [0.311925, 0.767822, 0.415586],
    [0.319809, 0.770914, 0.411152],
    [0.327796, 0.773980, 0.406640],
    [0.335885, 0.777018, 0.402049],
    [0.344074, 0.780029, 0.397381],
    [0.352360, 0.783011, 0.392636],
    [0.360741, 0.785964, 0.387814],
    [0.369214, 0.788888, 0.382914],
    [0.377779, 0.791781, 0.377939],
    [0.386433, 0.794644, 0.372886],
    [0.395174, 0.797475, 0.367757],
    [0.404001, 0.800275, 0.362552],
    [0.412913, 0.803041, 0.357269],
    [0.421908, 0.805774, 0.351910],
    [0.430983, 0.808473, 0.346476],
    [0.440137, 0.811138, 0.340967],
    [0.449368, 0.813768, 0.335384],
    [0.458674, 0.816363, 0.329727],
    [0.468053, 0.818921, 0.323998],
    [0.477504, 0.821444, 0.318195],
    [0.487026, 0.823929, 0.312321],
    [0.496615, 0.826376, 0.306377],
    [0.506271, 0.828786, 0.300362],
    [0.515992, 0.831158, 0.294279],
    [0.525776, 0.833491, 0.288127],
    [0.535621, 0.835785, 0.281908],
    [0.545524, 0.838039, 0.275626],
    [0.555484, 0.840254, 0.269281],
    [0.565498, 0.842430, 0.262877],
    [0.575563, 0.844566, 0.256415],
    [0.585678, 0.846661, 0.249897],
    [0.595839, 0.848717, 0.243329],
    [0.606045, 0.850733, 0.236712],
    [0.616293, 0.852709, 0.230052],
    [0.626579, 0.854645, 0.223353],
    [0.636902, 0.856542, 0.216620],
    [0.647257, 0.858400, 0.209861],
    [0.657642, 0.860219, 0.203082],
    [0.668054, 0.861999, 0.196293],
    [0.678489, 0.863742, 0.189503],
    [0.688944, 0.865448, 0.182725],
    [0.699415, 0.867117, 0.175971],
    [0.709898, 0.868751, 0.169257],
    [0.720391, 0.870350, 0.162603],
    [0.730889, 0.871916, 0.156029],
    [0.741388, 0.873449, 0.149561],
    [0.751884, 0.874951, 0.143228],
    [0.762373, 0.876424, 0.137064],
    [0.772852, 0.877868, 0.131109],
    [0.783315, 0.879285, 0.125405],
    [0.793760, 0.880678, 0.120005],
    [0.804182, 0.882046, 0.114965],
    [0.814576, 0.883393, 0.110347],
    [0.824940, 0.884720, 0.106217],
    [0.835270, 0.886029, 0.102646],
    [0.845561, 0.887322, 0.099702],
    [0.855810, 0.888601, 0.097452],
    [0.866013, 0.889868, 0.095953],
    [0.876168, 0.891125, 0.095250],
    [0.886271, 0.892374, 0.095374],
    [0.896320, 0.893616, 0.096335],
    [0.906311, 0.894855, 0.098125],
    [0.916242, 0.896091, 0.100717],
    [0.926106, 0.897330, 0.104071],
    [0.935904, 0.898570, 0.108131],
    [0.945636, 0.899815, 0.112838],
    [0.955300, 0.901065, 0.118128],
    [0.964894, 0.902323, 0.123941],
    [0.974417, 0.903590, 0.130215],
    [0.983868, 0.904867, 0.136897],
    [0.993248, 0.906157, 0.143936],
];

/// `plasma`, 256 entries.
pub(crate) const PLASMA: [[f64; 3]; 256] = [
    [0.050383, 0.029803, 0.527975],
    [0.063536, 0.028426, 0.533124],
    [0.075353, 0.027206, 0.538007],
    [0.086222, 0.026125, 0.542658],
    [0.096379, 0.025165, 0.547103],
    [0.105980, 0.024309, 0.551368],
    [0.115124, 0.023556, 0.555468],
    [0.123903, 0.022878, 0.559423],
    [0.132381, 0.022258, 0.563250],
    [0.140603, 0.021687, 0.566959],
    [0.148607, 0.021154, 0.570562],
    [0.156421, 0.020651, 0.574065],
    [0.164070, 0.020171, 0.577478],
    [0.171574, 0.019706, 0.580806],
    [0.178950, 0.019252, 0.584054],
    [0.186213, 0.018803, 0.587228],
    [0.193374, 0.018354, 0.590330],
    [0.200445, 0.017902, 0.593364],
    [0.207435, 0.017442, 0.596333],
    [0.214350, 0.016973, 0.599239],
    [0.221197, 0.016497, 0.602083],
    [0.227983, 0.016007, 0.604867],
    [0.234715, 0.015502, 0.607592],
    [0.241396, 0.014979, 0.610259],
    [0.248032, 0.014439, 0.612868],
    [0.254627, 0.013882, 0.615419],
    [0.261183, 0.013308, 0.617911],
    [0.267703, 0.012716, 0.620346],
    [0.274191, 0.012109, 0.622722],
    [0.280648, 0.011488, 0.625038],
    [0.287076, 0.010855, 0.627295],
    [0.293478, 0.010213, 0.629490],
    [0.299855, 0.009561, 0.631624],
    [0.306210, 0.008902, 0.633694],
    [0.312543, 0.008239, 0.635700],
    [0.318856, 0.007576, 0.637640],
    [0.325150, 0.006915, 0.639512],
    [0.331426, 0.006261, 0.641316],
    [0.337683, 0.005618, 0.643049],
    [0.343925, 0.004991, 0.644710],
    [0.350150, 0.004382, 0.646298],
    [0.356359, 0.003798, 0.647810],
    [0.362553, 0.003243, 0.649245],
    [0.368733, 0.002724, 0.650601],
    [0.374897, 0.002245, 0.651876],
    [0.381047, 0.001814, 0.653068],
    [0.387183, 0.001434, 0.654177],
    [0.393304, 0.001114, 0.655199],
    [0.399411, 0.000859, 0.656133],
    [0.405503, 0.000678, 0.656977],
    [0.411580, 0.000577, 0.657730],
    [0.417642, 0.000564, 0.658390],
    [0.423689, 0.000646, 0.658956],
    [0.429719, 0.000831, 0.659425],
    [0.435734, 0.001127, 0.659797],
    [0.441732, 0.001540, 0.660069],
    [0.447714, 0.002080, 0.660240],
    [0.453677, 0.002755, 0.660310],
    [0.459623, 0.003574, 0.660277],
    [0.465550, 0.004545, 0.660139],
    [0.471457, 0.005678, 0.659897],
    [0.477344, 0.006980, 0.659549],
    [0.483210, 0.008460, 0.659095],
    [0.489055, 0.010127, 0.658534],
    [0.494877, 0.011990, 0.657865],
    [0.500678, 0.014055, 0.657088],
    [0.506454, 0.016333, 0.656202],
    [0.512206, 0.018833, 0.655209],
    [0.517933, 0.021563, 0.654109],
    [0.523633, 0.024532, 0.652901],
    [0.529306, 0.027747, 0.651586],
    [0.534952, 0.031217, 0.650165],
    [0.540570, 0.034950, 0.648640],
    [0.546157, 0.038954, 0.647010],
    [0.551715, 0.043136, 0.645277],
    [0.557243, 0.047331, 0.643443],
    [0.562738, 0.051545, 0.641509],
    [0.568201, 0.055778, 0.639477],
    [0.573632, 0.060028, 0.637349],
    [0.579029, 0.064296, 0.635126],
    [0.584391, 0.068579, 0.632812],
    [0.589719, 0.072878, 0.630408],
    [0.595011, 0.077190, 0.627917],
    [0.600266, 0.081516, 0.625342],
    [0.605485, 0.085854, 0.622686],
    [0.610667, 0.090204, 0.619951],
    [0.615812, 0.094564, 0.617140],
    [0.620919, 0.098934, 0.614257],
    [0.625987, 0.103312, 0.611305],
    [0.631017, 0.107699, 0.608287],
    [0.636008, 0.112092, 0.605205],
    [0.640959, 0.116492, 0.602065],
    [0.645872, 0.120898, 0.598867],
    [0.650746, 0.125309, 0.595617],
    [0.655580, 0.129725, 0.592317],
    [0.660374, 0.134144, 0.588971],
    [0.665129, 0.138566, 0.585582],
    [0.669845, 0.142992, 0.582154],
    [0.674522, 0.147419, 0.578688],
    [0.679160, 0.151848, 0.575189],
    [0.683758, 0.156278, 0.571660],
    [0.688318, 0.160709, 0.568103],
    [0.692840, 0.165141, 0.564522],
    [0.697324, 0.169573, 0.560919],
    [0.701769, 0.174005, 0.557296],
    [0.706178, 0.178437, 0.553657],
    [0.710549, 0.182868, 0.550004],
    [0.714883, 0.187299, 0.546338],
    [0.719181, 0.191729, 0.542663],
    [0.723444, 0.196158, 0.538981],
    [0.727670, 0.200586, 0.535293],
    [0.731862, 0.205013, 0.531601],
    [0.736019, 0.209439, 0.527908],
    [0.740143, 0.213864, 0.524216],
    [0.744232, 0.218288, 0.520524],
    [0.748289, 0.222711, 0.516834],
    [0.752312, 0.227133, 0.513149],
    [0.756304, 0.231555, 0.509468],
    [0.760264, 0.235976, 0.505794],
    [0.764193, 0.240396, 0.502126],
    [0.768090, 0.244817, 0.498465],
    [0.771958, 0.249237, 0.494813],
    [0.775796, 0.253658, 0.491171],
    [0.779604, 0.258078, 0.487539],
    [0.783383, 0.262500, 0.483918],
    [0.787133, 0.266922, 0.480307],
    [0.790855, 0.271345, 0.476706],
    [0.794549, 0.275770, 0.473117],
    [0.798216, 0.280197, 0.469538],
    [0.801855, 0.284626, 0.465971],
    [0.805467, 0.289057, 0.462415],
    [0.809052, 0.293491, 0.458870],
    [0.812612, 0.297928, 0.455338],
    [0.816144, 0.302368, 0.451816],
    [0.819651, 0.306812, 0.448306],
    [0.823132, 0.311261, 0.444806],
    [0.826588, 0.315714, 0.441316],
    [0.830018, 0.320172, 0.437836],
    [0.833422, 0.324635, 0.434366],
    [0.836801, 0.329105, 0.430905],
    [0.840155, 0.333580, 0.427455],
    [0.843484, 0.338062, 0.424013],
    [0.846788, 0.342551, 0.420579],
    [0.850066, 0.347048, 0.417153],
    [0.853319, 0.351553, 0.413734],
    [0.856547, 0.356066, 0.410322],
    [0.859750, 0.360588, 0.406917],
    [0.862927, 0.365119, 0.403519],
    [0.866078, 0.369660, 0.400126],
    [0.869203, 0.374212, 0.396738],
    [0.872303, 0.378774, 0.393355],
    [0.875376, 0.383347, 0.389976],
    [0.878423, 0.387932, 0.386600],
    [0.881443, 0.392529, 0.383229],
    [0.884436, 0.397139, 0.379860],
    [0.887402, 0.401762, 0.376494],
    [0.890340, 0.406398, 0.373130],
    [0.893250, 0.411048, 0.369768],
    [0.896131, 0.415712, 0.366407],
    [0.898984, 0.420392, 0.363047],
    [0.901807, 0.425087, 0.359688],
    [0.904601, 0.429797, 0.356329],
    [0.907365, 0.434524, 0.352970],
    [0.910098, 0.439268, 0.349610],
    [0.912800, 0.444029, 0.346251],
    [0.915471, 0.448807, 0.342890],
    [0.918109, 0.453603, 0.339529],
    [0.920714, 0.458417, 0.336166],
    [0.923287, 0.463251, 0.332801],
    [0.925825, 0.468103, 0.329435],
    [0.928329, 0.472975, 0.326067],
    [0.930798, 0.477867, 0.322697],
    [0.933232, 0.482780, 0.319325],
    [0.935630, 0.487712, 0.315952],
    [0.937990, 0.492667, 0.312575],
    [0.940313, 0.497642, 0.309197],
    [0.942598, 0.502639, 0.305816],
    [0.944844, 0.507658, 0.302433],
    [0.947051, 0.512699, 0.299049],
    [0.949217, 0.517763, 0.295662],
    [0.951344, 0.522850, 0.292275],
    [0.953428, 0.527960, 0.288883],
    [0.955470, 0.533093, 0.285490],
    [0.957469, 0.538250, 0.282096],
    [0.959424, 0.543431, 0.278701],
    [0.961336, 0.548636, 0.275305],
    [0.963203, 0.553865, 0.271909],
    [0.965024, 0.559118, 0.268513],
    [0.966798, 0.564396, 0.265118],
    [0.968526, 0.569700, 0.261721],
    [0.970205, 0.575028, 0.258325],
    [0.971835, 0.580382, 0.254931],
    [0.973416, 0.585761, 0.251540],
    [0.974947, 0.591165, 0.248151],
    [0.976428, 0.596595, 0.244767],
    [0.977856, 0.602051, 0.241387],
    [0.979233, 0.607532, 0.238013],
    [0.980556, 0.613039, 0.234646],
    [0.981826, 0.618572, 0.231287],
    [0.983041, 0.624131, 0.227937],
    [0.984199, 0.629718, 0.224595],
    [0.985301, 0.635330, 0.221265],
    [0.986345, 0.640969, 0.217948],
    [0.987332, 0.646633, 0.214648],
    [0.988260, 0.652325, 0.211364],
    [0.989128, 0.658043, 0.208100],
    [0.989935, 0.663787, 0.204859],
    [0.990681, 0.669558, 0.201642],
    [0.991365, 0.675355, 0.198453],
    [0.991985, 0.681179, 0.195295],
    [0.992541, 0.687030, 0.192170],
    [0.993032, 0.692907, 0.189084],
    [0.993456, 0.698810, 0.186041],
    [0.993814, 0.704741, 0.183043],
    [0.994103, 0.710698, 0.180097],
    [0.994324, 0.716681, 0.177208],
    [0.994474, 0.722691, 0.174381],
    [0.994553, 0.728728, 0.171622],
    [0.994561, 0.734791, 0.168938],
    [0.994495, 0.740880, 0.166335],
    [0.994355, 0.746995, 0.163821],
    [0.994141, 0.753137, 0.161404],
    [0.993851, 0.759304, 0.159092],
    [0.993482, 0.765499, 0.156891],
    [0.993033, 0.771720, 0.154808],
    [0.992505, 0.777967, 0.152855],
    [0.991897, 0.784239, 0.151042],
    [0.991209, 0.790537, 0.149377],
    [0.990439, 0.796859, 0.147870],
    [0.989587, 0.803205, 0.146529],
    [0.988648, 0.809579, 0.145357],
    [0.987621, 0.815978, 0.144363],
    [0.986509, 0.822401, 0.143557],
    [0.985314, 0.828846, 0.142945],
    [0.984031, 0.835315, 0.142528],
    [0.982653, 0.841812, 0.142303],
    [0.981190, 0.848329, 0.142279],
    [0.979644, 0.854866, 0.142453],
    [0.977995, 0.861432, 0.142808],
    [0.976265, 0.868016, 0.143351],
    [0.974443, 0.874622, 0.144061],
    [0.972530, 0.881250, 0.144923],
    [0.970533, 0.887896, 0.145919],
    [0.968443, 0.894564, 0.147014],
    [0.966271, 0.901249, 0.148180],
    [0.964021, 0.907950, 0.149370],
    [0.961681, 0.914672, 0.150520],
    [0.959276, 0.921407, 0.151566],
    [0.956808, 0.928152, 0.152409],
    [0.954287, 0.934908, 0.152921],
    [0.951726, 0.941671, 0.152925],
    [0.949151, 0.948435, 0.152178],
    [0.946602, 0.955190, 0.150328],
    [0.944152, 0.961916, 0.146861],
    [0.941896, 0.968590, 0.140956],
    [0.940015, 0.975158, 0.131326],
];

/// `magma`, 256 entries.
pub(crate) const MAGMA: [[f64; 3]; 256] = [
    [0.001462, 0.000466, 0.013866],
    [0.002258, 0.001295, 0.018331],
    [0.003279, 0.002305, 0.023708],
    [0.004512, 0.003490, 0.029965],
    [0.005950, 0.004843, 0.037130],
    [0.007588, 0.006356, 0.044973],
    [0.009426, 0.008022, 0.052844],
    [0.011465, 0.009828, 0.060750],
    [0.013708, 0.011771, 0.068667],
    [0.016156, 0.013840, 0.076603],
    [0.018815, 0.016026, 0.084584],
    [0.021692, 0.018320, 0.092610],
    [0.024792, 0.020715, 0.100676],
    [0.028123, 0.023201, 0.108787],
    [0.031696, 0.025765, 0.116965],
    [0.035520, 0.028397, 0.125209],
    [0.039608, 0.031090, 0.133515],
    [0.043830, 0.033830, 0.141886],
    [0.048062, 0.036607, 0.150327],
    [0.052320, 0.039407, 0.158841],
    [0.056615, 0.042160, 0.167446],
    [0.060949, 0.044794, 0.176129],
    [0.065330, 0.047318, 0.184892],
    [0.069764, 0.049726, 0.193735],
    [0.074257, 0.052017, 0.202660],
    [0.078815, 0.054184, 0.211667],
    [0.083446, 0.056225, 0.220755],
    [0.088155, 0.058133, 0.229922],
    [0.092949, 0.059904, 0.239164],
    [0.097833, 0.061531, 0.248477],
    [0.102815, 0.063010, 0.257854],
    [0.107899, 0.064335, 0.267289],
    [0.113094, 0.065492, 0.276784],
    [0.118405, 0.066479, 0.286321],
    [0.123833, 0.067295, 0.295879],
    [0.129380, 0.067935, 0.305443],
    [0.135053, 0.068391, 0.315000],
    [0.140858, 0.068654, 0.324538],
    [0.146785, 0.068738, 0.334011],
    [0.152839, 0.068637, 0.343404],
    [0.159018, 0.068354, 0.352688],
    [0.165308, 0.067911, 0.361816],
    [0.171713, 0.067305, 0.370771],
    [0.178212, 0.066576, 0.379497],
    [0.184801, 0.065732, 0.387973],
    [0.191460, 0.064818, 0.396152],
    [0.198177, 0.063862, 0.404009],
    [0.204935, 0.062907, 0.411514],
    [0.211718, 0.061992, 0.418647],
    [0.218512, 0.061158, 0.425392],
    [0.225302, 0.060445, 0.431742],
    [0.232077, 0.059889, 0.437695],
    [0.238826, 0.059517, 0.443256],
    [0.245543, 0.059352, 0.448436],
    [0.252220, 0.059415, 0.453248],
    [0.258857, 0.059706, 0.457710],
    [0.265447, 0.060237, 0.461840],
    [0.271994, 0.060994, 0.465660],
    [0.278493, 0.061978, 0.469190],
    [0.284951, 0.063168, 0.472451],
    [0.291366, 0.064553, 0.475462],
    [0.297740, 0.066117, 0.478243],
    [0.304081, 0.067835, 0.480812],
    [0.310382, 0.069702, 0.483186],
    [0.316654, 0.071690, 0.485380],
    [0.322899, 0.073782, 0.487408],
    [0.329114, 0.075972, 0.489287],
    [0.335308, 0.078236, 0.491024],
    [0.341482, 0.080564, 0.492631],
    [0.347636, 0.082946, 0.494121],
    [0.353773, 0.085373, 0.495501],
    [0.359898, 0.087831, 0.496778],
    [0.366012, 0.090314, 0.497960],
    [0.372116, 0.092816, 0.499053],
    [0.378211, 0.095332, 0.500067],
    [0.384299, 0.097855, 0.501002],
    [0.390384, 0.100379, 0.501864],
    [0.396467, 0.102902, 0.502658],
    [0.402548, 0.105420, 0.503386],
    [0.408629, 0.107930, 0.504052],
    [0.414709, 0.110431, 0.504662],
    [0.420791, 0.112920, 0.505215],
    [0.426877, 0.115395, 0.505714],
    [0.432967, 0.117855, 0.506160],
    [0.439062, 0.120298, 0.506555],
    [0.445163, 0.122724, 0.506901],
    [0.451271, 0.125132, 0.507198],
    [0.457386, 0.127522, 0.507448],
    [0.463508, 0.129893, 0.507652],
    [0.469640, 0.132245, 0.507809],
    [0.475780, 0.134577, 0.507921],
    [0.481929, 0.136891, 0.507989],
    [0.488088, 0.139186, 0.508011],
    [0.494258, 0.141462, 0.507988],
    [0.500438, 0.143719, 0.507920],
    [0.506629, 0.145958, 0.507806],
    [0.512831, 0.148179, 0.507648],
    [0.519045, 0.150383, 0.507443],
    [0.525270, 0.152569, 0.507192],
    [0.531507, 0.154739, 0.506895],
    [0.537755, 0.156894, 0.506551],
    [0.544015, 0.159033, 0.506159],
    [0.550287, 0.161158, 0.505719],
    [0.556571, 0.163269, 0.505230],
    [0.562866, 0.165368, 0.504692],
    [0.569172, 0.167454, 0.504105],
    [0.575490, 0.169530, 0.503466],
    [0.581819, 0.171596, 0.502777],
    [0.588158, 0.173652, 0.502035],
    [0.594508, 0.175701, 0.501241],
    [0.600868, 0.177743, 0.500394],
    [0.607238, 0.179779, 0.499492],
    [0.613617, 0.181811, 0.498536],
    [0.620005, 0.183840, 0.497524],
    [0.626401, 0.185867, 0.496456],
    [0.632805, 0.187893, 0.495332],
    [0.639216, 0.189921, 0.494150],
    [0.645633, 0.191952, 0.492910],
    [0.652056, 0.193986, 0.491611],
    [0.658483, 0.196027, 0.490253],
    [0.664915, 0.198075, 0.488836],
    [0.671349, 0.200133, 0.487358],
    [0.677786, 0.202203, 0.485819],
    [0.684224, 0.204286, 0.484219],
    [0.690661, 0.206384, 0.482558],
    [0.697098, 0.208501, 0.480835],
    [0.703532, 0.210638, 0.479049],
    [0.709962, 0.212797, 0.477201],
    [0.716387, 0.214982, 0.475290],
    [0.722805, 0.217194, 0.473316],
    [0.729216, 0.219437, 0.471279],
    [0.735616, 0.221713, 0.469180],
    [0.742004, 0.224025, 0.467018],
    [0.748378, 0.226377, 0.464794],
    [0.754737, 0.228772, 0.462509],
    [0.761077, 0.231214, 0.460162],
    [0.767398, 0.233705, 0.457755],
    [0.773695, 0.236249, 0.455289],
    [0.779968, 0.238851, 0.452765],
    [0.786212, 0.241514, 0.450184],
    [0.792427, 0.244242, 0.447543],
    [0.798608, 0.247040, 0.444848],
    [0.804752, 0.249911, 0.442102],
    [0.810855, 0.252861, 0.439305],
    [0.816914, 0.255895, 0.436461],
    [0.822926, 0.259016, 0.433573],
    [0.828886, 0.262229, 0.430644],
    [0.834791, 0.265540, 0.427671],
    [0.840636, 0.268953, 0.424666],
    [0.846416, 0.272473, 0.421631],
    [0.852126, 0.276106, 0.418573],
    [0.857763, 0.279857, 0.415496],
    [0.863320, 0.283729, 0.412403],
    [0.868793, 0.287728, 0.409303],
    [0.874176, 0.291859, 0.406205],
    [0.879464, 0.296125, 0.403118],
    [0.884651, 0.300530, 0.400047],
    [0.889731, 0.305079, 0.397002],
    [0.894700, 0.309773, 0.393995],
    [0.899552, 0.314616, 0.391037],
    [0.904281, 0.319610, 0.388137],
    [0.908884, 0.324755, 0.385308],
    [0.913354, 0.330052, 0.382563],
    [0.917689, 0.335500, 0.379915],
    [0.921884, 0.341098, 0.377376],
    [0.925937, 0.346844, 0.374959],
    [0.929845, 0.352734, 0.372677],
    [0.933606, 0.358764, 0.370541],
    [0.937221, 0.364929, 0.368567],
    [0.940687, 0.371224, 0.366762],
    [0.944006, 0.377643, 0.365136],
    [0.947180, 0.384178, 0.363701],
    [0.950210, 0.390820, 0.362468],
    [0.953099, 0.397563, 0.361438],
    [0.955849, 0.404400, 0.360619],
    [0.958464, 0.411324, 0.360014],
    [0.960949, 0.418323, 0.359630],
    [0.963310, 0.425390, 0.359469],
    [0.965549, 0.432519, 0.359529],
    [0.967671, 0.439703, 0.359810],
    [0.969680, 0.446936, 0.360311],
    [0.971582, 0.454210, 0.361030],
    [0.973381, 0.461520, 0.361965],
    [0.975082, 0.468861, 0.363111],
    [0.976690, 0.476226, 0.364466],
    [0.978210, 0.483612, 0.366025],
    [0.979645, 0.491014, 0.367783],
    [0.981000, 0.498428, 0.369734],
    [0.982279, 0.505851, 0.371874],
    [0.983485, 0.513280, 0.374198],
    [0.984622, 0.520713, 0.376698],
    [0.985693, 0.528148, 0.379371],
    [0.986700, 0.535582, 0.382210],
    [0.987646, 0.543015, 0.385210],
    [0.988533, 0.550446, 0.388365],
    [0.989363, 0.557873, 0.391671],
    [0.990138, 0.565296, 0.395122],
    [0.990871, 0.572706, 0.398714],
    [0.991558, 0.580107, 0.402441],
    [0.992196, 0.587502, 0.406299],
    [0.992785, 0.594891, 0.410283],
    [0.993326, 0.602275, 0.414390],
    [0.993834, 0.609644, 0.418613],
    [0.994309, 0.616999, 0.422950],
    [0.994738, 0.624350, 0.427397],
    [0.995122, 0.631696, 0.431951],
    [0.995480, 0.639027, 0.436607],
    [0.995810, 0.646344, 0.441361],
    [0.996096, 0.653659, 0.446213],
    [0.996341, 0.660969, 0.451160],
    [0.996580, 0.668256, 0.456192],
    [0.996775, 0.675541, 0.461314],
    [0.996925, 0.682828, 0.466526],
    [0.997077, 0.690088, 0.471811],
    [0.997186, 0.697349, 0.477182],
    [0.997254, 0.704611, 0.482635],
    [0.997325, 0.711848, 0.488154],
    [0.997351, 0.719089, 0.493755],
    [0.997351, 0.726324, 0.499428],
    [0.997341, 0.733545, 0.505167],
    [0.997285, 0.740772, 0.510983],
    [0.997228, 0.747981, 0.516859],
    [0.997138, 0.755190, 0.522806],
    [0.997019, 0.762398, 0.528821],
    [0.996898, 0.769591, 0.534892],
    [0.996727, 0.776795, 0.541039],
    [0.996571, 0.783977, 0.547233],
    [0.996369, 0.791167, 0.553499],
    [0.996162, 0.798348, 0.559820],
    [0.995932, 0.805527, 0.566202],
    [0.995680, 0.812706, 0.572645],
    [0.995424, 0.819875, 0.579140],
    [0.995131, 0.827052, 0.585701],
    [0.994851, 0.834213, 0.592307],
    [0.994524, 0.841387, 0.598983],
    [0.994222, 0.848540, 0.605696],
    [0.993866, 0.855711, 0.612482],
    [0.993545, 0.862859, 0.619299],
    [0.993170, 0.870024, 0.626189],
    [0.992831, 0.877168, 0.633109],
    [0.992440, 0.884330, 0.640099],
    [0.992089, 0.891470, 0.647116],
    [0.991688, 0.898627, 0.654202],
    [0.991332, 0.905763, 0.661309],
    [0.990930, 0.912915, 0.668481],
    [0.990570, 0.920049, 0.675675],
    [0.990175, 0.927196, 0.682926],
    [0.989815, 0.934329, 0.690198],
    [0.989434, 0.941470, 0.697519],
    [0.989077, 0.948604, 0.704863],
    [0.988717, 0.955742, 0.712242],
    [0.988367, 0.962878, 0.719649],
    [0.988033, 0.970012, 0.727077],
    [0.987691, 0.977154, 0.734536],
    [0.987387, 0.984288, 0.742002],
    [0.987053, 0.991438, 0.749504],
];

/// `inferno`, 256 entries.
pub(crate) const INFERNO: [[f64; 3]; 256] = [
    [0.001462, 0.000466, 0.013866],
    [0.002267, 0.001270, 0.018570],
    [0.003299, 0.002249, 0.024239],
    [0.004547, 0.003392, 0.030909],
    [0.006006, 0.004692, 0.038558],
    [0.007676, 0.006136, 0.046836],
    [0.009561, 0.007713, 0.055143],
    [0.011663, 0.009417, 0.063460],
    [0.013995, 0.011225, 0.071862],
    [0.016561, 0.013136, 0.080282],
    [0.019373, 0.015133, 0.088767],
    [0.022447, 0.017199, 0.097327],
    [0.025793, 0.019331, 0.105930],
    [0.029432, 0.021503, 0.114621],
    [0.033385, 0.023702, 0.123397],
    [0.037668, 0.025921, 0.132232],
    [0.042253, 0.028139, 0.141141],
    [0.046915, 0.030324, 0.150164],
    [0.051644, 0.032474, 0.159254],
    [0.056449, 0.034569, 0.168414],
    [0.061340, 0.036590, 0.177642],
    [0.066331, 0.038504, 0.186962],
    [0.071429, 0.040294, 0.196354],
    [0.076637, 0.041905, 0.205799],
    [0.081962, 0.043328, 0.215289],
    [0.087411, 0.044556, 0.224813],
    [0.092990, 0.045583, 0.234358],
    [0.098702, 0.046402, 0.243904],
    [0.104551, 0.047008, 0.253430],
    [0.110536, 0.047399, 0.262912],
    [0.116656, 0.047574, 0.272321],
    [0.122908, 0.047536, 0.281624],
    [0.129285, 0.047293, 0.290788],
    [0.135778, 0.046856, 0.299776],
    [0.142378, 0.046242, 0.308553],
    [0.149073, 0.045468, 0.317085],
    [0.155850, 0.044559, 0.325338],
    [0.162689, 0.043554, 0.333277],
    [0.169575, 0.042489, 0.340874],
    [0.176493, 0.041402, 0.348111],
    [0.183429, 0.040329, 0.354971],
    [0.190367, 0.039309, 0.361447],
    [0.197297, 0.038400, 0.367535],
    [0.204209, 0.037632, 0.373238],
    [0.211095, 0.037030, 0.378563],
    [0.217949, 0.036615, 0.383522],
    [0.224763, 0.036405, 0.388129],
    [0.231538, 0.036405, 0.392400],
    [0.238273, 0.036621, 0.396353],
    [0.244967, 0.037055, 0.400007],
    [0.251620, 0.037705, 0.403378],
    [0.258234, 0.038571, 0.406485],
    [0.264810, 0.039647, 0.409345],
    [0.271347, 0.040922, 0.411976],
    [0.277850, 0.042353, 0.414392],
    [0.284321, 0.043933, 0.416608],
    [0.290763, 0.045644, 0.418637],
    [0.297178, 0.047470, 0.420491],
    [0.303568, 0.049396, 0.422182],
    [0.309935, 0.051407, 0.423721],
    [0.316282, 0.053490, 0.425116],
    [0.322610, 0.055634, 0.426377],
    [0.328921, 0.057827, 0.427511],
    [0.335217, 0.060060, 0.428524],
    [0.341500, 0.062325, 0.429425],
    [0.347771, 0.064616, 0.430217],
    [0.354032, 0.066925, 0.430906],
    [0.360284, 0.069247, 0.431497],
    [0.366529, 0.071579, 0.431994],
    [0.372768, 0.073915, 0.432400],
    [0.379001, 0.076253, 0.432719],
    [0.385228, 0.078591, 0.432955],
    [0.391453, 0.080927, 0.433109],
    [0.397674, 0.083257, 0.433183],
    [0.403894, 0.085580, 0.433179],
    [0.410113, 0.087896, 0.433098],
    [0.416331, 0.090203, 0.432943],
    [0.422549, 0.092501, 0.432714],
    [0.428768, 0.094790, 0.432412],
    [0.434987, 0.097069, 0.432039],
    [0.441207, 0.099338, 0.431594],
    [0.447428, 0.101597, 0.431080],
    [0.453651, 0.103848, 0.430498],
    [0.459875, 0.106089, 0.429846],
    [0.466100, 0.108322, 0.429125],
    [0.472328, 0.110547, 0.428334],
    [0.478558, 0.112764, 0.427475],
    [0.484789, 0.114974, 0.426548],
    [0.491022, 0.117179, 0.425552],
    [0.497257, 0.119379, 0.424488],
    [0.503493, 0.121575, 0.423356],
    [0.509730, 0.123769, 0.422156],
    [0.515967, 0.125960, 0.420887],
    [0.522206, 0.128150, 0.419549],
    [0.528444, 0.130341, 0.418142],
    [0.534683, 0.132534, 0.416667],
    [0.540920, 0.134729, 0.415123],
    [0.547157, 0.136929, 0.413511],
    [0.553392, 0.139134, 0.411829],
    [0.559624, 0.141346, 0.410078],
    [0.565854, 0.143567, 0.408258],
    [0.572081, 0.145797, 0.406369],
    [0.578304, 0.148039, 0.404411],
    [0.584521, 0.150294, 0.402385],
    [0.590734, 0.152563, 0.400290],
    [0.596940, 0.154848, 0.398125],
    [0.603139, 0.157151, 0.395891],
    [0.609330, 0.159474, 0.393589],
    [0.615513, 0.161817, 0.391219],
    [0.621685, 0.164184, 0.388781],
    [0.627847, 0.166575, 0.386276],
    [0.633998, 0.168992, 0.383704],
    [0.640135, 0.171438, 0.381065],
    [0.646260, 0.173914, 0.378359],
    [0.652369, 0.176421, 0.375586],
    [0.658463, 0.178962, 0.372748],
    [0.664540, 0.181539, 0.369846],
    [0.670599, 0.184153, 0.366879],
    [0.676638, 0.186807, 0.363849],
    [0.682656, 0.189501, 0.360757],
    [0.688653, 0.192239, 0.357603],
    [0.694627, 0.195021, 0.354388],
    [0.700576, 0.197851, 0.351113],
    [0.706500, 0.200728, 0.347777],
    [0.712396, 0.203656, 0.344383],
    [0.718264, 0.206636, 0.340931],
    [0.724103, 0.209670, 0.337424],
    [0.729909, 0.212759, 0.333861],
    [0.735683, 0.215906, 0.330245],
    [0.741423, 0.219112, 0.326576],
    [0.747127, 0.222378, 0.322856],
    [0.752794, 0.225706, 0.319085],
    [0.758422, 0.229097, 0.315266],
    [0.764010, 0.232554, 0.311399],
    [0.769556, 0.236077, 0.307485],
    [0.775059, 0.239667, 0.303526],
    [0.780517, 0.243327, 0.299523],
    [0.785929, 0.247056, 0.295477],
    [0.791293, 0.250856, 0.291390],
    [0.796607, 0.254728, 0.287264],
    [0.801871, 0.258674, 0.283099],
    [0.807082, 0.262692, 0.278898],
    [0.812239, 0.266786, 0.274661],
    [0.817341, 0.270954, 0.270390],
    [0.822386, 0.275197, 0.266085],
    [0.827372, 0.279517, 0.261750],
    [0.832299, 0.283913, 0.257383],
    [0.837165, 0.288385, 0.252988],
    [0.841969, 0.292933, 0.248564],
    [0.846709, 0.297559, 0.244113],
    [0.851384, 0.302260, 0.239636],
    [0.855992, 0.307038, 0.235133],
    [0.860533, 0.311892, 0.230606],
    [0.865006, 0.316822, 0.226055],
    [0.869409, 0.321827, 0.221482],
    [0.873741, 0.326906, 0.216886],
    [0.878001, 0.332060, 0.212268],
    [0.882188, 0.337287, 0.207628],
    [0.886302, 0.342586, 0.202968],
    [0.890341, 0.347957, 0.198286],
    [0.894305, 0.353399, 0.193584],
    [0.898192, 0.358911, 0.188860],
    [0.902003, 0.364492, 0.184116],
    [0.905735, 0.370140, 0.179350],
    [0.909390, 0.375856, 0.174563],
    [0.912966, 0.381636, 0.169755],
    [0.916462, 0.387481, 0.164924],
    [0.919879, 0.393389, 0.160070],
    [0.923215, 0.399359, 0.155193],
    [0.926470, 0.405389, 0.150292],
    [0.929644, 0.411479, 0.145367],
    [0.932737, 0.417627, 0.140417],
    [0.935747, 0.423831, 0.135440],
    [0.938675, 0.430091, 0.130438],
    [0.941521, 0.436405, 0.125409],
    [0.944285, 0.442772, 0.120354],
    [0.946965, 0.449191, 0.115272],
    [0.949562, 0.455660, 0.110164],
    [0.952075, 0.462178, 0.105031],
    [0.954506, 0.468744, 0.099874],
    [0.956852, 0.475356, 0.094695],
    [0.959114, 0.482014, 0.089499],
    [0.961293, 0.488716, 0.084289],
    [0.963387, 0.495462, 0.079073],
    [0.965397, 0.502249, 0.073859],
    [0.967322, 0.509078, 0.068659],
    [0.969163, 0.515946, 0.063488],
    [0.970919, 0.522853, 0.058367],
    [0.972590, 0.529798, 0.053324],
    [0.974176, 0.536780, 0.048392],
    [0.975677, 0.543798, 0.043618],
    [0.977092, 0.550850, 0.039050],
    [0.978422, 0.557937, 0.034931],
    [0.979666, 0.565057, 0.031409],
    [0.980824, 0.572209, 0.028508],
    [0.981895, 0.579392, 0.026250],
    [0.982881, 0.586606, 0.024661],
    [0.983779, 0.593849, 0.023770],
    [0.984591, 0.601122, 0.023606],
    [0.985315, 0.608422, 0.024202],
    [0.985952, 0.615750, 0.025592],
    [0.986502, 0.623105, 0.027814],
    [0.986964, 0.630485, 0.030908],
    [0.987337, 0.637890, 0.034916],
    [0.987622, 0.645320, 0.039886],
    [0.987819, 0.652773, 0.045581],
    [0.987926, 0.660250, 0.051750],
    [0.987945, 0.667748, 0.058329],
    [0.987874, 0.675267, 0.065257],
    [0.987714, 0.682807, 0.072489],
    [0.987464, 0.690366, 0.079990],
    [0.987124, 0.697944, 0.087731],
    [0.986694, 0.705540, 0.095694],
    [0.986175, 0.713153, 0.103863],
    [0.985566, 0.720782, 0.112229],
    [0.984865, 0.728427, 0.120785],
    [0.984075, 0.736087, 0.129527],
    [0.983196, 0.743758, 0.138453],
    [0.982228, 0.751442, 0.147565],
    [0.981173, 0.759135, 0.156863],
    [0.980032, 0.766837, 0.166353],
    [0.978806, 0.774545, 0.176037],
    [0.977497, 0.782258, 0.185923],
    [0.976108, 0.789974, 0.196018],
    [0.974638, 0.797692, 0.206332],
    [0.973088, 0.805409, 0.216877],
    [0.971468, 0.813122, 0.227658],
    [0.969783, 0.820825, 0.238686],
    [0.968041, 0.828515, 0.249972],
    [0.966243, 0.836191, 0.261534],
    [0.964394, 0.843848, 0.273391],
    [0.962517, 0.851476, 0.285546],
    [0.960626, 0.859069, 0.298010],
    [0.958720, 0.866624, 0.310820],
    [0.956834, 0.874129, 0.323974],
    [0.954997, 0.881569, 0.337475],
    [0.953215, 0.888942, 0.351369],
    [0.951546, 0.896226, 0.365627],
    [0.950018, 0.903409, 0.380271],
    [0.948683, 0.910473, 0.395289],
    [0.947594, 0.917399, 0.410665],
    [0.946809, 0.924168, 0.426373],
    [0.946392, 0.930761, 0.442367],
    [0.946403, 0.937159, 0.458592],
    [0.946903, 0.943348, 0.474970],
    [0.947937, 0.949318, 0.491426],
    [0.949545, 0.955063, 0.507860],
    [0.951740, 0.960587, 0.524203],
    [0.954529, 0.965896, 0.540361],
    [0.957896, 0.971003, 0.556275],
    [0.961812, 0.975924, 0.571925],
    [0.966249, 0.980678, 0.587206],
    [0.971162, 0.985282, 0.602154],
    [0.976511, 0.989753, 0.616760],
    [0.982257, 0.994109, 0.631017],
    [0.988362, 0.998364, 0.644924],
];

/// `cividis`, 256 entries.
pub(crate) const CIVIDIS: [[f64; 3]; 256] = [
    [0.000000, 0.135112, 0.304751],
    [0.000000, 0.138068, 0.311105],
    [0.000000, 0.141013, 0.317579],
    [0.000000, 0.143951, 0.323982],
    [0.000000, 0.146877, 0.330479],
    [0.000000, 0.149791, 0.337065],
    [0.000000, 0.152673, 0.343704],
    [0.000000, 0.155377, 0.350500],
    [0.000000, 0.157932, 0.357521],
    [0.000000, 0.160495, 0.364534],
    [0.000000, 0.163058, 0.371608],
    [0.000000, 0.165621, 0.378769],
    [0.000000, 0.168204, 0.385902],
    [0.000000, 0.170800, 0.393100],
    [0.000000, 0.173420, 0.400353],
    [0.000000, 0.176082, 0.407577],
    [0.000000, 0.178802, 0.414764],
    [0.000000, 0.181610, 0.421859],
    [0.000000, 0.184550, 0.428802],
    [0.000000, 0.186915, 0.435532],
    [0.000000, 0.188769, 0.439563],
    [0.000000, 0.190950, 0.441085],
    [0.000000, 0.193366, 0.441561],
    [0.003602, 0.195911, 0.441564],
    [0.017852, 0.198528, 0.441248],
    [0.032110, 0.201199, 0.440785],
    [0.046205, 0.203903, 0.440196],
    [0.058378, 0.206629, 0.439531],
    [0.068968, 0.209372, 0.438863],
    [0.078624, 0.212122, 0.438105],
    [0.087465, 0.214879, 0.437342],
    [0.095645, 0.217643, 0.436593],
    [0.103401, 0.220406, 0.435790],
    [0.110658, 0.223170, 0.435067],
    [0.117612, 0.225935, 0.434308],
    [0.124291, 0.228697, 0.433547],
    [0.130669, 0.231458, 0.432840],
    [0.136830, 0.234216, 0.432148],
    [0.142852, 0.236972, 0.431404],
    [0.148638, 0.239724, 0.430752],
    [0.154261, 0.242475, 0.430120],
    [0.159733, 0.245221, 0.429528],
    [0.165113, 0.247965, 0.428908],
    [0.170362, 0.250707, 0.428325],
    [0.175490, 0.253444, 0.427790],
    [0.180503, 0.256180, 0.427299],
    [0.185453, 0.258914, 0.426788],
    [0.190303, 0.261644, 0.426329],
    [0.195057, 0.264372, 0.425924],
    [0.199764, 0.267099, 0.425497],
    [0.204385, 0.269823, 0.425126],
    [0.208926, 0.272546, 0.424809],
    [0.213431, 0.275266, 0.424480],
    [0.217863, 0.277985, 0.424206],
    [0.222264, 0.280702, 0.423914],
    [0.226598, 0.283419, 0.423678],
    [0.230871, 0.286134, 0.423498],
    [0.235120, 0.288848, 0.423304],
    [0.239312, 0.291562, 0.423167],
    [0.243485, 0.294274, 0.423014],
    [0.247605, 0.296986, 0.422917],
    [0.251675, 0.299698, 0.422873],
    [0.255731, 0.302409, 0.422814],
    [0.259740, 0.305120, 0.422810],
    [0.263738, 0.307831, 0.422789],
    [0.267693, 0.310542, 0.422821],
    [0.271639, 0.313253, 0.422837],
    [0.275513, 0.315965, 0.422979],
    [0.279411, 0.318677, 0.423031],
    [0.283240, 0.321390, 0.423211],
    [0.287065, 0.324103, 0.423373],
    [0.290884, 0.326816, 0.423517],
    [0.294669, 0.329531, 0.423716],
    [0.298421, 0.332247, 0.423973],
    [0.302169, 0.334963, 0.424213],
    [0.305886, 0.337681, 0.424512],
    [0.309601, 0.340399, 0.424790],
    [0.313287, 0.343120, 0.425120],
    [0.316941, 0.345842, 0.425512],
    [0.320595, 0.348565, 0.425889],
    [0.324250, 0.351289, 0.426250],
    [0.327875, 0.354016, 0.426670],
    [0.331474, 0.356744, 0.427144],
    [0.335073, 0.359474, 0.427605],
    [0.338673, 0.362206, 0.428053],
    [0.342246, 0.364939, 0.428559],
    [0.345793, 0.367676, 0.429127],
    [0.349341, 0.370414, 0.429685],
    [0.352892, 0.373153, 0.430226],
    [0.356418, 0.375896, 0.430823],
    [0.359916, 0.378641, 0.431501],
    [0.363446, 0.381388, 0.432075],
    [0.366923, 0.384139, 0.432796],
    [0.370430, 0.386890, 0.433428],
    [0.373884, 0.389646, 0.434209],
    [0.377371, 0.392404, 0.434890],
    [0.380830, 0.395164, 0.435653],
    [0.384268, 0.397928, 0.436475],
    [0.387705, 0.400694, 0.437305],
    [0.391151, 0.403464, 0.438096],
    [0.394568, 0.406236, 0.438986],
    [0.397991, 0.409011, 0.439848],
    [0.401418, 0.411790, 0.440708],
    [0.404820, 0.414572, 0.441642],
    [0.408226, 0.417357, 0.442570],
    [0.411607, 0.420145, 0.443577],
    [0.414992, 0.422937, 0.444578],
    [0.418383, 0.425733, 0.445560],
    [0.421748, 0.428531, 0.446640],
    [0.425120, 0.431334, 0.447692],
    [0.428462, 0.434140, 0.448864],
    [0.431817, 0.436950, 0.449982],
    [0.435168, 0.439763, 0.451134],
    [0.438504, 0.442580, 0.452341],
    [0.441810, 0.445402, 0.453659],
    [0.445148, 0.448226, 0.454885],
    [0.448447, 0.451053, 0.456264],
    [0.451759, 0.453887, 0.457582],
    [0.455072, 0.456718, 0.458976],
    [0.458366, 0.459552, 0.460457],
    [0.461616, 0.462405, 0.461969],
    [0.464947, 0.465241, 0.463395],
    [0.468254, 0.468083, 0.464908],
    [0.471501, 0.470960, 0.466357],
    [0.474812, 0.473832, 0.467681],
    [0.478186, 0.476699, 0.468845],
    [0.481622, 0.479573, 0.469767],
    [0.485141, 0.482451, 0.470384],
    [0.488697, 0.485318, 0.471008],
    [0.492278, 0.488198, 0.471453],
    [0.495913, 0.491076, 0.471751],
    [0.499552, 0.493960, 0.472032],
    [0.503185, 0.496851, 0.472305],
    [0.506866, 0.499743, 0.472432],
    [0.510540, 0.502643, 0.472550],
    [0.514226, 0.505546, 0.472640],
    [0.517920, 0.508454, 0.472707],
    [0.521643, 0.511367, 0.472639],
    [0.525348, 0.514285, 0.472660],
    [0.529086, 0.517207, 0.472543],
    [0.532829, 0.520135, 0.472401],
    [0.536553, 0.523067, 0.472352],
    [0.540307, 0.526005, 0.472163],
    [0.544069, 0.528948, 0.471947],
    [0.547840, 0.531895, 0.471704],
    [0.551612, 0.534849, 0.471439],
    [0.555393, 0.537807, 0.471147],
    [0.559181, 0.540771, 0.470829],
    [0.562972, 0.543741, 0.470488],
    [0.566802, 0.546715, 0.469988],
    [0.570607, 0.549695, 0.469593],
    [0.574417, 0.552682, 0.469172],
    [0.578236, 0.555673, 0.468724],
    [0.582087, 0.558670, 0.468118],
    [0.585916, 0.561674, 0.467618],
    [0.589753, 0.564682, 0.467090],
    [0.593622, 0.567697, 0.466401],
    [0.597469, 0.570718, 0.465821],
    [0.601354, 0.573743, 0.465074],
    [0.605211, 0.576777, 0.464441],
    [0.609105, 0.579816, 0.463638],
    [0.612977, 0.582861, 0.462950],
    [0.616852, 0.585913, 0.462237],
    [0.620765, 0.588970, 0.461351],
    [0.624654, 0.592034, 0.460583],
    [0.628576, 0.595104, 0.459641],
    [0.632506, 0.598180, 0.458668],
    [0.636412, 0.601264, 0.457818],
    [0.640352, 0.604354, 0.456791],
    [0.644270, 0.607450, 0.455886],
    [0.648222, 0.610553, 0.454801],
    [0.652178, 0.613664, 0.453689],
    [0.656114, 0.616780, 0.452702],
    [0.660082, 0.619904, 0.451534],
    [0.664055, 0.623034, 0.450338],
    [0.668008, 0.626171, 0.449270],
    [0.671991, 0.629316, 0.448018],
    [0.675981, 0.632468, 0.446736],
    [0.679979, 0.635626, 0.445424],
    [0.683950, 0.638793, 0.444251],
    [0.687957, 0.641966, 0.442886],
    [0.691971, 0.645145, 0.441491],
    [0.695985, 0.648334, 0.440072],
    [0.700008, 0.651529, 0.438624],
    [0.704037, 0.654731, 0.437147],
    [0.708067, 0.657942, 0.435647],
    [0.712105, 0.661160, 0.434117],
    [0.716177, 0.664384, 0.432386],
    [0.720222, 0.667618, 0.430805],
    [0.724274, 0.670859, 0.429194],
    [0.728334, 0.674107, 0.427554],
    [0.732422, 0.677364, 0.425717],
    [0.736488, 0.680629, 0.424028],
    [0.740589, 0.683900, 0.422131],
    [0.744664, 0.687181, 0.420393],
    [0.748772, 0.690470, 0.418448],
    [0.752886, 0.693766, 0.416472],
    [0.756975, 0.697071, 0.414659],
    [0.761096, 0.700384, 0.412638],
    [0.765223, 0.703705, 0.410587],
    [0.769353, 0.707035, 0.408516],
    [0.773486, 0.710373, 0.406422],
    [0.777651, 0.713719, 0.404112],
    [0.781795, 0.717074, 0.401966],
    [0.785965, 0.720438, 0.399613],
    [0.790116, 0.723810, 0.397423],
    [0.794298, 0.727190, 0.395016],
    [0.798480, 0.730580, 0.392597],
    [0.802667, 0.733978, 0.390153],
    [0.806859, 0.737385, 0.387684],
    [0.811054, 0.740801, 0.385198],
    [0.815274, 0.744226, 0.382504],
    [0.819499, 0.747659, 0.379785],
    [0.823729, 0.751101, 0.377043],
    [0.827959, 0.754553, 0.374292],
    [0.832192, 0.758014, 0.371529],
    [0.836429, 0.761483, 0.368747],
    [0.840693, 0.764962, 0.365746],
    [0.844957, 0.768450, 0.362741],
    [0.849223, 0.771947, 0.359729],
    [0.853515, 0.775454, 0.356500],
    [0.857809, 0.778969, 0.353259],
    [0.862105, 0.782494, 0.350011],
    [0.866421, 0.786028, 0.346571],
    [0.870717, 0.789572, 0.343333],
    [0.875057, 0.793125, 0.339685],
    [0.879378, 0.796687, 0.336241],
    [0.883720, 0.800258, 0.332599],
    [0.888081, 0.803839, 0.328770],
    [0.892440, 0.807430, 0.324968],
    [0.896818, 0.811030, 0.320982],
    [0.901195, 0.814639, 0.317021],
    [0.905589, 0.818257, 0.312889],
    [0.910000, 0.821885, 0.308594],
    [0.914407, 0.825522, 0.304348],
    [0.918828, 0.829168, 0.299960],
    [0.923279, 0.832822, 0.295244],
    [0.927724, 0.836486, 0.290611],
    [0.932180, 0.840159, 0.285880],
    [0.936660, 0.843841, 0.280876],
    [0.941147, 0.847530, 0.275815],
    [0.945654, 0.851228, 0.270532],
    [0.950178, 0.854933, 0.265085],
    [0.954725, 0.858646, 0.259365],
    [0.959284, 0.862365, 0.253563],
    [0.963872, 0.866089, 0.247445],
    [0.968469, 0.869819, 0.241310],
    [0.973114, 0.873550, 0.234677],
    [0.977780, 0.877281, 0.227954],
    [0.982497, 0.881008, 0.220878],
    [0.987293, 0.884718, 0.213336],
    [0.992218, 0.888385, 0.205468],
    [0.994847, 0.892954, 0.203445],
    [0.995249, 0.898384, 0.207561],
    [0.995503, 0.903866, 0.212370],
    [0.995737, 0.909344, 0.217772],
];

/// `turbo`, 256 entries.
pub(crate) const TURBO: [[f64; 3]; 256] = [
    [0.18995, 0.07176, 0.23217],
    [0.19483, 0.08339, 0.26149],
    [0.19956, 0.09498, 0.29024],
    [0.20415, 0.10652, 0.31844],
    [0.20860, 0.11802, 0.34607],
    [0.21291, 0.12947, 0.37314],
    [0.21708, 0.14087, 0.39964],
    [0.22111, 0.15223, 0.42558],
    [0.22500, 0.16354, 0.45096],
    [0.22875, 0.17481, 0.47578],
    [0.23236, 0.18603, 0.50004],
    [0.23582, 0.19720, 0.52373],
    [0.23915, 0.20833, 0.54686],
    [0.24234, 0.21941, 0.56942],
    [0.24539, 0.23044, 0.59142],
    [0.24830, 0.24143, 0.61286],
    [0.25107, 0.25237, 0.63374],
    [0.25369, 0.26327, 0.65406],
    [0.25618, 0.27412, 0.67381],
    [0.25853, 0.28492, 0.69300],
    [0.26074, 0.29568, 0.71162],
    [0.26280, 0.30639, 0.72968],
    [0.26473, 0.31706, 0.74718],
    [0.26652, 0.32768, 0.76412],
    [0.26816, 0.33825, 0.78050],
    [0.26967, 0.34878, 0.79631],
    [0.27103, 0.35926, 0.81156],
    [0.27226, 0.36970, 0.82624],
    [0.27334, 0.38008, 0.84037],
    [0.27429, 0.39043, 0.85393],
    [0.27509, 0.40072, 0.86692],
    [0.27576, 0.41097, 0.87936],
    [0.27628, 0.42118, 0.89123],
    [0.27667, 0.43134, 0.90254],
    [0.27691, 0.44145, 0.91328],
    [0.27701, 0.45152, 0.92347],
    [0.27698, 0.46153, 0.93309],
    [0.27680, 0.47151, 0.94214],
    [0.27648, 0.48144, 0.95064],
    [0.27603, 0.49132, 0.95857],
    [0.27543, 0.50115, 0.96594],
    [0.27469, 0.51094, 0.97275],
    [0.27381, 0.52069, 0.97899],
    [0.27273, 0.53040, 0.98461],
    [0.27106, 0.54015, 0.98930],
    [0.26878, 0.54995, 0.99303],
    [0.26592, 0.55979, 0.99583],
    [0.26252, 0.56967, 0.99773],
    [0.25862, 0.57958, 0.99876],
    [0.25425, 0.58950, 0.99896],
    [0.24946, 0.59943, 0.99835],
    [0.24427, 0.60937, 0.99697],
    [0.23874, 0.61931, 0.99485],
    [0.23288, 0.62923, 0.99202],
    [0.22676, 0.63913, 0.98851],
    [0.22039, 0.64901, 0.98436],
    [0.21382, 0.65886, 0.97959],
    [0.20708, 0.66866, 0.97423],
    [0.20021, 0.67842, 0.96833],
    [0.19326, 0.68812, 0.96190],
    [0.18625, 0.69775, 0.95498],
    [0.17923, 0.70732, 0.94761],
    [0.17223, 0.71680, 0.93981],
    [0.16529, 0.72620, 0.93161],
    [0.15844, 0.73551, 0.92305],
    [0.15173, 0.74472, 0.91416],
    [0.14519, 0.75381, 0.90496],
    [0.13886, 0.76279, 0.89550],
    [0.13278, 0.77165, 0.88580],
    [0.12698, 0.78037, 0.87590],
    [0.12151, 0.78896, 0.86581],
    [0.11639, 0.79740, 0.85559],
    [0.11167, 0.80569, 0.84525],
    [0.10738, 0.81381, 0.83484],
    [0.10357, 0.82177, 0.82437],
    [0.10026, 0.82955, 0.81389],
    [0.09750, 0.83714, 0.80342],
    [0.09532, 0.84455, 0.79299],
    [0.09377, 0.85175, 0.78264],
    [0.09287, 0.85875, 0.77240],
    [0.09267, 0.86554, 0.76230],
    [0.09320, 0.87211, 0.75237],
    [0.09451, 0.87844, 0.74265],
    [0.09662, 0.88454, 0.73316],
    [0.09958, 0.89040, 0.72393],
    [0.10342, 0.89600, 0.71500],
    [0.10815, 0.90142, 0.70599],
    [0.11374, 0.90673, 0.69651],
    [0.12014, 0.91193, 0.68660],
    [0.12733, 0.91701, 0.67627],
    [0.13526, 0.92197, 0.66556],
    [0.14391, 0.92680, 0.65448],
    [0.15323, 0.93151, 0.64308],
    [0.16319, 0.93609, 0.63137],
    [0.17377, 0.94053, 0.61938],
    [0.18491, 0.94484, 0.60713],
    [0.19659, 0.94901, 0.59466],
    [0.20877, 0.95304, 0.58199],
    [0.22142, 0.95692, 0.56914],
    [0.23449, 0.96065, 0.55614],
    [0.24797, 0.96423, 0.54303],
    [0.26180, 0.96765, 0.52981],
    [0.27597, 0.97092, 0.51653],
    [0.29042, 0.97403, 0.50321],
    [0.30513, 0.97697, 0.48987],
    [0.32006, 0.97974, 0.47654],
    [0.33517, 0.98234, 0.46325],
    [0.35043, 0.98477, 0.45002],
    [0.36581, 0.98702, 0.43688],
    [0.38127, 0.98909, 0.42386],
    [0.39678, 0.99098, 0.41098],
    [0.41229, 0.99268, 0.39826],
    [0.42778, 0.99419, 0.38575],
    [0.44321, 0.99551, 0.37345],
    [0.45854, 0.99663, 0.36140],
    [0.47375, 0.99755, 0.34963],
    [0.48879, 0.99828, 0.33816],
    [0.50362, 0.99879, 0.32701],
    [0.51822, 0.99910, 0.31622],
    [0.53255, 0.99919, 0.30581],
    [0.54658, 0.99907, 0.29581],
    [0.56026, 0.99873, 0.28623],
    [0.57357, 0.99817, 0.27712],
    [0.58646, 0.99739, 0.26849],
    [0.59891, 0.99638, 0.26038],
    [0.61088, 0.99514, 0.25280],
    [0.62233, 0.99366, 0.24579],
    [0.63323, 0.99195, 0.23937],
    [0.64362, 0.98999, 0.23356],
    [0.65394, 0.98775, 0.22835],
    [0.66428, 0.98524, 0.22370],
    [0.67462, 0.98246, 0.21960],
    [0.68494, 0.97941, 0.21602],
    [0.69525, 0.97610, 0.21294],
    [0.70553, 0.97255, 0.21032],
    [0.71577, 0.96875, 0.20815],
    [0.72596, 0.96470, 0.20640],
    [0.73610, 0.96043, 0.20504],
    [0.74617, 0.95593, 0.20406],
    [0.75617, 0.95121, 0.20343],
    [0.76608, 0.94627, 0.20311],
    [0.77591, 0.94113, 0.20310],
    [0.78563, 0.93579, 0.20336],
    [0.79524, 0.93025, 0.20386],
    [0.80473, 0.92452, 0.20459],
    [0.81410, 0.91861, 0.20552],
    [0.82333, 0.91253, 0.20663],
    [0.83241, 0.90627, 0.20788],
    [0.84133, 0.89986, 0.20926],
    [0.85010, 0.89328, 0.21074],
    [0.85868, 0.88655, 0.21230],
    [0.86709, 0.87968, 0.21391],
    [0.87530, 0.87267, 0.21555],
    [0.88331, 0.86553, 0.21719],
    [0.89112, 0.85826, 0.21880],
    [0.89870, 0.85087, 0.22038],
    [0.90605, 0.84337, 0.22188],
    [0.91317, 0.83576, 0.22328],
    [0.92004, 0.82806, 0.22456],
    [0.92666, 0.82025, 0.22570],
    [0.93301, 0.81236, 0.22667],
    [0.93909, 0.80439, 0.22744],
    [0.94489, 0.79634, 0.22800],
    [0.95039, 0.78823, 0.22831],
    [0.95560, 0.78005, 0.22836],
    [0.96049, 0.77181, 0.22811],
    [0.96507, 0.76352, 0.22754],
    [0.96931, 0.75519, 0.22663],
    [0.97323, 0.74682, 0.22536],
    [0.97679, 0.73842, 0.22369],
    [0.98000, 0.73000, 0.22161],
    [0.98289, 0.72140, 0.21918],
    [0.98549, 0.71250, 0.21650],
    [0.98781, 0.70330, 0.21358],
    [0.98986, 0.69382, 0.21043],
    [0.99163, 0.68408, 0.20706],
    [0.99314, 0.67408, 0.20348],
    [0.99438, 0.66386, 0.19971],
    [0.99535, 0.65341, 0.19577],
    [0.99607, 0.64277, 0.19165],
    [0.99654, 0.63193, 0.18738],
    [0.99675, 0.62093, 0.18297],
    [0.99672, 0.60977, 0.17842],
    [0.99644, 0.59846, 0.17376],
    [0.99593, 0.58703, 0.16899],
    [0.99517, 0.57549, 0.16412],
    [0.99419, 0.56386, 0.15918],
    [0.99297, 0.55214, 0.15417],
    [0.99153, 0.54036, 0.14910],
    [0.98987, 0.52854, 0.14398],
    [0.98799, 0.51667, 0.13883],
    [0.98590, 0.50479, 0.13367],
    [0.98360, 0.49291, 0.12849],
    [0.98108, 0.48104, 0.12332],
    [0.97837, 0.46920, 0.11817],
    [0.97545, 0.45740, 0.11305],
    [0.97234, 0.44565, 0.10797],
    [0.96904, 0.43399, 0.10294],
    [0.96555, 0.42241, 0.09798],
    [0.96187, 0.41093, 0.09310],
    [0.95801, 0.39958, 0.08831],
    [0.95398, 0.38836, 0.08362],
    [0.94977, 0.37729, 0.07905],
    [0.94538, 0.36638, 0.07461],
    [0.94084, 0.35566, 0.07031],
    [0.93612, 0.34513, 0.06616],
    [0.93125, 0.33482, 0.06218],
    [0.92623, 0.32473, 0.05837],
    [0.92105, 0.31489, 0.05475],
    [0.91572, 0.30530, 0.05134],
    [0.91024, 0.29599, 0.04814],
    [0.90463, 0.28696, 0.04516],
    [0.89888, 0.27824, 0.04243],
    [0.89298, 0.26981, 0.03993],
    [0.88691, 0.26152, 0.03753],
    [0.88066, 0.25334, 0.03521],
    [0.87422, 0.24526, 0.03297],
    [0.86760, 0.23730, 0.03082],
    [0.86079, 0.22945, 0.02875],
    [0.85380, 0.22170, 0.02677],
    [0.84662, 0.21407, 0.02487],
    [0.83926, 0.20654, 0.02305],
    [0.83172, 0.19912, 0.02131],
    [0.82399, 0.19182, 0.01966],
    [0.81608, 0.18462, 0.01809],
    [0.80799, 0.17753, 0.01660],
    [0.79971, 0.17055, 0.01520],
    [0.79125, 0.16368, 0.01387],
    [0.78260, 0.15693, 0.01264],
    [0.77377, 0.15028, 0.01148],
    [0.76476, 0.14374, 0.01041],
    [0.75556, 0.13731, 0.00942],
    [0.74617, 0.13098, 0.00851],
    [0.73661, 0.12477, 0.00769],
    [0.72686, 0.11867, 0.00695],
    [0.71692, 0.11268, 0.00629],
    [0.70680, 0.10680, 0.00571],
    [0.69650, 0.10102, 0.00522],
    [0.68602, 0.09536, 0.00481],
    [0.67535, 0.08980, 0.00449],
    [0.66449, 0.08436, 0.00424],
    [0.65345, 0.07902, 0.00408],
    [0.64223, 0.07380, 0.00401],
    [0.63082, 0.06868, 0.00401],
    [0.61923, 0.06367, 0.00410],
    [0.60746, 0.05878, 0.00427],
    [0.59550, 0.05399, 0.00453],
    [0.58336, 0.04931, 0.00486],
    [0.57103, 0.04474, 0.00529],
    [0.55852, 0.04028, 0.00579],
    [0.54583, 0.03593, 0.00638],
    [0.53295, 0.03169, 0.00705],
    [0.51989, 0.02756, 0.00780],
    [0.50664, 0.02354, 0.00863],
    [0.49321, 0.01963, 0.00955],
    [0.47960, 0.01583, 0.01055],
];

/// `coolwarm` control points, evenly spaced over \[0, 1\].
pub(crate) const COOLWARM: [[f64; 3]; 33] = [
    [0.2298057, 0.298717966, 0.753683153],
    [0.26623388, 0.353094838, 0.801466763],
    [0.30386891, 0.406535296, 0.84495867],
    [0.342804478, 0.458757618, 0.883725899],
    [0.38301334, 0.50941904, 0.917387822],
    [0.424369608, 0.558148092, 0.945619588],
    [0.46666708, 0.604562568, 0.968154911],
    [0.509635204, 0.648280772, 0.98478814],
    [0.552953156, 0.688929332, 0.995375608],
    [0.596262162, 0.726149107, 0.999836203],
    [0.639176211, 0.759599947, 0.998151185],
    [0.681291281, 0.788964712, 0.990363227],
    [0.722193294, 0.813952739, 0.976574709],
    [0.761464949, 0.834302879, 0.956945269],
    [0.798691636, 0.849786142, 0.931688648],
    [0.833466556, 0.860207984, 0.901068838],
    [0.865395197, 0.86541021, 0.865395561],
    [0.897787179, 0.848937047, 0.820880546],
    [0.924127593, 0.827384882, 0.774508472],
    [0.944468518, 0.800927443, 0.726736146],
    [0.958852946, 0.769767752, 0.678007945],
    [0.96732803, 0.734132809, 0.628751763],
    [0.969954137, 0.694266682, 0.579375448],
    [0.966811177, 0.650421156, 0.530263762],
    [0.958003065, 0.602842431, 0.481775914],
    [0.943660866, 0.551750968, 0.434243684],
    [0.923944917, 0.49730856, 0.387970225],
    [0.89904617, 0.439559467, 0.343229596],
    [0.869186849, 0.378313092, 0.300267182],
    [0.834620542, 0.312874446, 0.259301199],
    [0.795631745, 0.24128379, 0.220525627],
    [0.752534934, 0.157246067, 0.184115123],
    [0.705673158, 0.01555616, 0.150232812],
];

/// `rocket`, 256 entries.
pub(crate) const ROCKET: [u32; 256] = [
    0x03051a, 0x04051a, 0x05061b, 0x06071c, 0x07071d, 0x08081e, 0x0a091f, 0x0b0920,
    0x0d0a21, 0x0e0b22, 0x100b23, 0x110c24, 0x130d25, 0x140e26, 0x160e27, 0x170f28,
    0x180f29, 0x1a102a, 0x1b112b, 0x1d112c, 0x1e122d, 0x20122e, 0x211330, 0x221331,
    0x241432, 0x251433, 0x271534, 0x281535, 0x2a1636, 0x2b1637, 0x2d1738, 0x2e1739,
    0x30173a, 0x31183b, 0x33183c, 0x34193d, 0x35193e, 0x37193f, 0x381a40, 0x3a1a41,
    0x3c1a42, 0x3d1a42, 0x3f1b43, 0x401b44, 0x421b45, 0x431c46, 0x451c47, 0x461c48,
    0x481c48, 0x491d49, 0x4b1d4a, 0x4c1d4b, 0x4e1d4b, 0x501d4c, 0x511e4d, 0x531e4d,
    0x541e4e, 0x561e4f, 0x581e4f, 0x591e50, 0x5b1e51, 0x5c1e51, 0x5e1f52, 0x601f52,
    0x611f53, 0x631f53, 0x641f54, 0x661f54, 0x681f55, 0x691f55, 0x6b1f56, 0x6d1f56,
    0x6e1f57, 0x701f57, 0x711f57, 0x731f58, 0x751f58, 0x761f58, 0x781f59, 0x7a1f59,
    0x7b1f59, 0x7d1f5a, 0x7f1e5a, 0x811e5a, 0x821e5a, 0x841e5a, 0x861e5b, 0x871e5b,
    0x891e5b, 0x8b1d5b, 0x8c1d5b, 0x8e1d5b, 0x901d5b, 0x921c5b, 0x931c5b, 0x951c5b,
    0x971c5b, 0x981b5b, 0x9a1b5b, 0x9c1b5b, 0x9e1a5b, 0x9f1a5b, 0xa11a5b, 0xa3195b,
    0xa4195b, 0xa6195a, 0xa8185a, 0xaa185a, 0xab185a, 0xad1759, 0xaf1759, 0xb01759,
    0xb21758, 0xb41658, 0xb51657, 0xb71657, 0xb91657, 0xba1656, 0xbc1656, 0xbd1655,
    0xbf1654, 0xc11754, 0xc21753, 0xc41753, 0xc51852, 0xc71951, 0xc81951, 0xca1a50,
    0xcb1b4f, 0xcd1c4e, 0xce1d4e, 0xcf1e4d, 0xd11f4c, 0xd2204c, 0xd3214b, 0xd5224a,
    0xd62449, 0xd72549, 0xd82748, 0xd92847, 0xdb2946, 0xdc2b46, 0xdd2c45, 0xde2e44,
    0xdf2f44, 0xe03143, 0xe13342, 0xe23442, 0xe33641, 0xe43841, 0xe53940, 0xe63b40,
    0xe73d3f, 0xe83f3f, 0xe8403e, 0xe9423e, 0xea443e, 0xeb463e, 0xeb483e, 0xec4a3e,
    0xec4c3e, 0xed4e3e, 0xed503e, 0xee523f, 0xee543f, 0xef5640, 0xef5840, 0xef5a41,
    0xf05c42, 0xf05e42, 0xf06043, 0xf16244, 0xf16445, 0xf16646, 0xf26747, 0xf26948,
    0xf26b49, 0xf26d4b, 0xf26f4c, 0xf3714d, 0xf3734e, 0xf37450, 0xf37651, 0xf37852,
    0xf47a54, 0xf47c55, 0xf47d57, 0xf47f58, 0xf4815a, 0xf4835b, 0xf4845d, 0xf4865e,
    0xf58860, 0xf58a61, 0xf58b63, 0xf58d64, 0xf58f66, 0xf59067, 0xf59269, 0xf5946b,
    0xf5966c, 0xf5976e, 0xf59970, 0xf69b71, 0xf69c73, 0xf69e75, 0xf6a077, 0xf6a178,
    0xf6a37a, 0xf6a47c, 0xf6a67e, 0xf6a880, 0xf6a981, 0xf6ab83, 0xf6ad85, 0xf6ae87,
    0xf6b089, 0xf6b18b, 0xf6b38d, 0xf6b48f, 0xf6b691, 0xf6b893, 0xf6b995, 0xf6bb97,
    0xf6bc99, 0xf6be9b, 0xf6bf9d, 0xf6c19f, 0xf7c2a2, 0xf7c4a4, 0xf7c6a6, 0xf7c7a8,
    0xf7c9aa, 0xf7caac, 0xf7ccaf, 0xf7cdb1, 0xf7cfb3, 0xf7d0b5, 0xf8d1b8, 0xf8d3ba,
    0xf8d4bc, 0xf8d6be, 0xf8d7c0, 0xf8d9c3, 0xf8dac5, 0xf8dcc7, 0xf9ddc9, 0xf9dfcb,
    0xf9e0cd, 0xf9e2d0, 0xf9e3d2, 0xf9e5d4, 0xfae6d6, 0xfae8d8, 0xfae9da, 0xfaebdd,
];

/// `mako`, 256 entries.
pub(crate) const MAKO: [u32; 256] = [
    0x0b0405, 0x0d0406, 0x0e0508, 0x0f0609, 0x10060a, 0x11070c, 0x12080d, 0x13090f,
    0x140910, 0x150a12, 0x160b13, 0x170c15, 0x180d16, 0x190e18, 0x1a0e19, 0x1b0f1a,
    0x1c101c, 0x1d111d, 0x1e111f, 0x1f1220, 0x201322, 0x211423, 0x221425, 0x231526,
    0x241628, 0x251729, 0x26172b, 0x27182d, 0x28192e, 0x291930, 0x291a31, 0x2a1b33,
    0x2b1c35, 0x2c1c36, 0x2d1d38, 0x2e1e39, 0x2e1e3b, 0x2f1f3d, 0x30203e, 0x312140,
    0x312142, 0x322243, 0x332345, 0x342447, 0x342548, 0x35254a, 0x35264c, 0x36274d,
    0x37284f, 0x372851, 0x382953, 0x382a54, 0x392b56, 0x3a2c58, 0x3a2c59, 0x3b2d5b,
    0x3b2e5d, 0x3b2f5f, 0x3c3060, 0x3c3162, 0x3d3164, 0x3d3266, 0x3e3367, 0x3e3469,
    0x3e356b, 0x3f366d, 0x3f366f, 0x3f3770, 0x403872, 0x403974, 0x403a76, 0x403b78,
    0x403c79, 0x413d7b, 0x413e7d, 0x413e7f, 0x413f80, 0x414082, 0x414184, 0x414285,
    0x414387, 0x414488, 0x40468a, 0x40478b, 0x40488d, 0x40498e, 0x3f4a8f, 0x3f4b90,
    0x3f4c92, 0x3e4d93, 0x3e4f94, 0x3e5095, 0x3d5195, 0x3d5296, 0x3c5397, 0x3c5598,
    0x3b5698, 0x3b5799, 0x3b589a, 0x3a599a, 0x3a5b9b, 0x3a5c9b, 0x395d9c, 0x395e9c,
    0x385f9c, 0x38619d, 0x38629d, 0x38639d, 0x37649e, 0x37659e, 0x37669e, 0x37689f,
    0x36699f, 0x366a9f, 0x366b9f, 0x366ca0, 0x366da0, 0x366fa0, 0x3670a0, 0x3671a0,
    0x3572a1, 0x3573a1, 0x3574a1, 0x3575a1, 0x3576a2, 0x3578a2, 0x3579a2, 0x357aa2,
    0x357ba3, 0x357ca3, 0x357da3, 0x357ea4, 0x347fa4, 0x3480a4, 0x3482a4, 0x3483a5,
    0x3484a5, 0x3485a5, 0x3486a5, 0x3487a6, 0x3488a6, 0x3489a6, 0x348ba6, 0x348ca7,
    0x348da7, 0x348ea7, 0x348fa7, 0x3490a8, 0x3491a8, 0x3492a8, 0x3493a8, 0x3495a9,
    0x3496a9, 0x3497a9, 0x3498a9, 0x3499aa, 0x349aaa, 0x359baa, 0x359caa, 0x359eaa,
    0x359fab, 0x35a0ab, 0x35a1ab, 0x36a2ab, 0x36a3ab, 0x36a4ab, 0x37a5ac, 0x37a6ac,
    0x37a8ac, 0x38a9ac, 0x38aaac, 0x39abac, 0x39acac, 0x3aadac, 0x3aaead, 0x3bafad,
    0x3cb1ad, 0x3cb2ad, 0x3db3ad, 0x3eb4ad, 0x3fb5ad, 0x3fb6ad, 0x40b7ad, 0x41b8ad,
    0x42b9ad, 0x43baad, 0x44bcad, 0x45bdad, 0x46bead, 0x47bfad, 0x48c0ad, 0x49c1ad,
    0x4bc2ad, 0x4cc3ad, 0x4dc4ad, 0x4fc5ad, 0x50c6ad, 0x52c7ad, 0x53c9ad, 0x55caad,
    0x57cbad, 0x59ccad, 0x5bcdad, 0x5ecdad, 0x60ceac, 0x62cfac, 0x65d0ad, 0x68d1ad,
    0x6ad2ad, 0x6dd3ad, 0x70d4ad, 0x73d4ad, 0x76d5ae, 0x79d6ae, 0x7cd6af, 0x7fd7af,
    0x82d8b0, 0x85d9b1, 0x88d9b1, 0x8bdab2, 0x8edbb3, 0x91dbb4, 0x94dcb5, 0x96ddb5,
    0x99ddb6, 0x9cdeb7, 0x9edfb8, 0xa1dfb9, 0xa4e0bb, 0xa6e1bc, 0xa9e1bd, 0xabe2be,
    0xaee3c0, 0xb0e4c1, 0xb2e4c2, 0xb5e5c4, 0xb7e6c5, 0xb9e6c7, 0xbbe7c8, 0xbee8ca,
    0xc0e9cc, 0xc2e9cd, 0xc4eacf, 0xc6ebd1, 0xc8ecd2, 0xcaedd4, 0xccedd6, 0xceeed7,
    0xd0efd9, 0xd2f0db, 0xd4f1dc, 0xd6f1de, 0xd8f2e0, 0xdaf3e1, 0xdcf4e3, 0xdef5e5,
];

/// `flare`, 256 entries.
pub(crate) const FLARE: [u32; 256] = [
    0xedb081, 0xedaf80, 0xedae7f, 0xedad7f, 0xedac7e, 0xedab7e, 0xecaa7d, 0xeca97c,
    0xeca87c, 0xeca77b, 0xeca67b, 0xeca57a, 0xeca479, 0xeca379, 0xeca278, 0xeca178,
    0xeca077, 0xec9f76, 0xeb9e76, 0xeb9d75, 0xeb9c75, 0xeb9b74, 0xeb9a73, 0xeb9973,
    0xeb9972, 0xeb9872, 0xeb9771, 0xea9671, 0xea9570, 0xea946f, 0xea936f, 0xea926e,
    0xea916e, 0xea906d, 0xea8f6c, 0xea8e6c, 0xe98d6b, 0xe98c6b, 0xe98b6a, 0xe98a6a,
    0xe98969, 0xe98868, 0xe98768, 0xe98667, 0xe88567, 0xe88466, 0xe88366, 0xe88265,
    0xe88165, 0xe88064, 0xe87f64, 0xe77e63, 0xe77d63, 0xe77c63, 0xe77b62, 0xe77a62,
    0xe67961, 0xe67861, 0xe67760, 0xe67660, 0xe67560, 0xe5745f, 0xe5735f, 0xe5725f,
    0xe5715e, 0xe5705e, 0xe46f5e, 0xe46e5e, 0xe46d5d, 0xe46c5d, 0xe36b5d, 0xe36a5d,
    0xe3695d, 0xe3685c, 0xe2675c, 0xe2665c, 0xe2655c, 0xe1645c, 0xe1635c, 0xe1625c,
    0xe0615c, 0xe0605c, 0xe05f5c, 0xdf5f5c, 0xdf5e5c, 0xde5d5c, 0xde5c5c, 0xde5b5c,
    0xdd5a5c, 0xdd595c, 0xdc585c, 0xdc575c, 0xdb565d, 0xdb565d, 0xda555d, 0xda545d,
    0xd9535d, 0xd9525e, 0xd8525e, 0xd7515e, 0xd7505e, 0xd64f5f, 0xd64f5f, 0xd54e5f,
    0xd44d60, 0xd44c60, 0xd34c60, 0xd24b60, 0xd24a61, 0xd14a61, 0xd04962, 0xd04962,
    0xcf4862, 0xce4763, 0xcd4763, 0xcc4663, 0xcc4664, 0xcb4564, 0xca4564, 0xc94465,
    0xc84465, 0xc84365, 0xc74366, 0xc64366, 0xc54266, 0xc44267, 0xc34167, 0xc24167,
    0xc14168, 0xc14068, 0xc04068, 0xbf4069, 0xbe3f69, 0xbd3f69, 0xbc3f69, 0xbb3f6a,
    0xba3e6a, 0xb93e6a, 0xb83e6b, 0xb73d6b, 0xb63d6b, 0xb53d6b, 0xb43d6b, 0xb33c6c,
    0xb23c6c, 0xb13c6c, 0xb13c6c, 0xb03b6d, 0xaf3b6d, 0xae3b6d, 0xad3b6d, 0xac3a6d,
    0xab3a6d, 0xaa3a6e, 0xa93a6e, 0xa8396e, 0xa7396e, 0xa6396e, 0xa5396e, 0xa4386f,
    0xa3386f, 0xa2386f, 0xa1386f, 0xa1376f, 0xa0376f, 0x9f376f, 0x9e3770, 0x9d3670,
    0x9c3670, 0x9b3670, 0x9a3670, 0x993570, 0x983570, 0x973570, 0x963570, 0x953470,
    0x943470, 0x943471, 0x933471, 0x923371, 0x913371, 0x903371, 0x8f3371, 0x8e3271,
    0x8d3271, 0x8c3271, 0x8b3271, 0x8a3171, 0x893171, 0x883171, 0x873171, 0x873171,
    0x863071, 0x853071, 0x843071, 0x833070, 0x822f70, 0x812f70, 0x802f70, 0x7f2f70,
    0x7e2f70, 0x7d2e70, 0x7c2e70, 0x7b2e70, 0x7a2e70, 0x792e6f, 0x782e6f, 0x772d6f,
    0x762d6f, 0x752d6f, 0x752d6f, 0x742d6e, 0x732c6e, 0x722c6e, 0x712c6e, 0x702c6e,
    0x6f2c6d, 0x6e2c6d, 0x6d2b6d, 0x6c2b6d, 0x6b2b6c, 0x6a2b6c, 0x692b6c, 0x682a6c,
    0x672a6b, 0x662a6b, 0x652a6b, 0x642a6a, 0x642a6a, 0x63296a, 0x62296a, 0x612969,
    0x602969, 0x5f2969, 0x5e2868, 0x5d2868, 0x5c2868, 0x5b2867, 0x5a2767, 0x592767,
    0x582766, 0x582766, 0x572766, 0x562666, 0x552665, 0x542665, 0x532665, 0x522564,
    0x512564, 0x502564, 0x4f2463, 0x4f2463, 0x4e2463, 0x4d2463, 0x4c2362, 0x4b2362,
];

/// `crest`, 256 entries.
pub(crate) const CREST: [u32; 256] = [
    0xa5cd90, 0xa4cc90, 0xa3cc91, 0xa2cb91, 0xa0cb91, 0x9fca91, 0x9eca91, 0x9dc991,
    0x9cc891, 0x9bc891, 0x9ac791, 0x99c791, 0x98c691, 0x96c691, 0x95c591, 0x94c591,
    0x93c491, 0x92c491, 0x91c391, 0x90c391, 0x8fc291, 0x8ec291, 0x8dc191, 0x8bc191,
    0x8ac091, 0x89bf91, 0x88bf91, 0x87be91, 0x86be91, 0x85bd91, 0x84bd91, 0x82bc91,
    0x81bc91, 0x80bb91, 0x7fbb91, 0x7eba91, 0x7dba91, 0x7cb991, 0x7bb991, 0x79b891,
    0x78b891, 0x77b791, 0x76b791, 0x75b690, 0x74b690, 0x73b590, 0x72b490, 0x71b490,
    0x70b390, 0x6fb390, 0x6eb290, 0x6db290, 0x6cb190, 0x6bb190, 0x6ab090, 0x69b090,
    0x68af90, 0x67ae90, 0x66ae90, 0x65ad90, 0x64ad90, 0x63ac90, 0x62ac90, 0x62ab90,
    0x61aa90, 0x60aa90, 0x5fa990, 0x5ea990, 0x5da890, 0x5ca890, 0x5ba790, 0x5ba690,
    0x5aa690, 0x59a590, 0x58a590, 0x57a490, 0x57a490, 0x56a390, 0x55a290, 0x54a290,
    0x53a190, 0x53a190, 0x52a090, 0x519f90, 0x509f90, 0x509e90, 0x4f9e90, 0x4e9d90,
    0x4e9d90, 0x4d9c90, 0x4c9b90, 0x4b9b90, 0x4b9a8f, 0x4a9a8f, 0x49998f, 0x49988f,
    0x48988f, 0x47978f, 0x47978f, 0x46968f, 0x45958f, 0x45958f, 0x44948f, 0x43948f,
    0x43938f, 0x42928f, 0x41928f, 0x41918f, 0x40918f, 0x40908e, 0x3f8f8e, 0x3e8f8e,
    0x3e8e8e, 0x3d8e8e, 0x3c8d8e, 0x3c8c8e, 0x3b8c8e, 0x3a8b8e, 0x3a8b8e, 0x398a8e,
    0x388a8e, 0x38898e, 0x37888e, 0x37888d, 0x36878d, 0x35878d, 0x35868d, 0x34858d,
    0x33858d, 0x33848d, 0x32848d, 0x31838d, 0x31828d, 0x30828d, 0x2f818d, 0x2f818d,
    0x2e808d, 0x2d808c, 0x2d7f8c, 0x2c7e8c, 0x2c7e8c, 0x2b7d8c, 0x2a7d8c, 0x2a7c8c,
    0x297b8c, 0x287b8c, 0x287a8c, 0x277a8c, 0x27798c, 0x26788c, 0x25788c, 0x25778c,
    0x24778b, 0x24768b, 0x23758b, 0x23758b, 0x22748b, 0x22748b, 0x21738b, 0x21728b,
    0x20728b, 0x20718b, 0x20718b, 0x1f708b, 0x1f6f8a, 0x1e6f8a, 0x1e6e8a, 0x1e6d8a,
    0x1e6d8a, 0x1d6c8a, 0x1d6c8a, 0x1d6b8a, 0x1d6a8a, 0x1d6a8a, 0x1c6989, 0x1c6889,
    0x1c6889, 0x1c6789, 0x1c6689, 0x1c6689, 0x1c6589, 0x1c6488, 0x1c6488, 0x1c6388,
    0x1d6388, 0x1d6288, 0x1d6188, 0x1d6187, 0x1d6087, 0x1d5f87, 0x1d5f87, 0x1e5e87,
    0x1e5d86, 0x1e5d86, 0x1e5c86, 0x1e5b86, 0x1f5b86, 0x1f5a85, 0x1f5985, 0x1f5985,
    0x205885, 0x205784, 0x205784, 0x205684, 0x215584, 0x215583, 0x215483, 0x225383,
    0x225283, 0x225282, 0x225182, 0x235082, 0x235081, 0x234f81, 0x244e81, 0x244e80,
    0x244d80, 0x254c80, 0x254c7f, 0x254b7f, 0x254a7f, 0x26497e, 0x26497e, 0x26487e,
    0x27477d, 0x27477d, 0x27467c, 0x27457c, 0x28457c, 0x28447b, 0x28437b, 0x28427a,
    0x29427a, 0x29417a, 0x294079, 0x294079, 0x2a3f78, 0x2a3e78, 0x2a3d78, 0x2a3d77,
    0x2a3c77, 0x2a3b76, 0x2b3b76, 0x2b3a76, 0x2b3975, 0x2b3875, 0x2b3875, 0x2b3774,
    0x2b3674, 0x2c3574, 0x2c3573, 0x2c3473, 0x2c3373, 0x2c3272, 0x2c3172, 0x2c3172,
];

/// `vlag`, 256 entries.
pub(crate) const VLAG: [u32; 256] = [
    0x2369bd, 0x266abd, 0x296cbc, 0x2c6dbc, 0x2f6ebc, 0x316fbc, 0x3470bc, 0x3671bc,
    0x3972bc, 0x3b73bc, 0x3d74bc, 0x3f75bc, 0x4276bc, 0x4477bc, 0x4678bc, 0x4879bc,
    0x4a7bbc, 0x4c7cbc, 0x4e7dbc, 0x507ebc, 0x517fbc, 0x5380bc, 0x5581bc, 0x5782bc,
    0x5983bd, 0x5b84bd, 0x5c85bd, 0x5e86bd, 0x6087bd, 0x6288bd, 0x6489be, 0x658abe,
    0x678bbe, 0x698cbe, 0x6a8dbf, 0x6c8ebf, 0x6e90bf, 0x6f91bf, 0x7192c0, 0x7393c0,
    0x7594c0, 0x7695c1, 0x7896c1, 0x7997c1, 0x7b98c2, 0x7d99c2, 0x7e9ac2, 0x809bc3,
    0x829cc3, 0x839dc4, 0x859ec4, 0x87a0c4, 0x88a1c5, 0x8aa2c5, 0x8ba3c6, 0x8da4c6,
    0x8fa5c7, 0x90a6c7, 0x92a7c8, 0x93a8c8, 0x95a9c8, 0x97abc9, 0x98acc9, 0x9aadca,
    0x9baecb, 0x9dafcb, 0x9fb0cc, 0xa0b1cc, 0xa2b2cd, 0xa3b4cd, 0xa5b5ce, 0xa7b6ce,
    0xa8b7cf, 0xaab8d0, 0xabb9d0, 0xadbbd1, 0xafbcd1, 0xb0bdd2, 0xb2bed3, 0xb3bfd3,
    0xb5c0d4, 0xb7c2d5, 0xb8c3d5, 0xbac4d6, 0xbbc5d7, 0xbdc6d7, 0xbfc8d8, 0xc0c9d9,
    0xc2cada, 0xc3cbda, 0xc5cddb, 0xc7cedc, 0xc8cfdd, 0xcad0dd, 0xcbd1de, 0xcdd3df,
    0xcfd4e0, 0xd0d5e0, 0xd2d7e1, 0xd4d8e2, 0xd5d9e3, 0xd7dae4, 0xd9dce5, 0xdadde5,
    0xdcdee6, 0xdde0e7, 0xdfe1e8, 0xe1e2e9, 0xe2e3ea, 0xe4e5eb, 0xe6e6ec, 0xe7e7ec,
    0xe9e9ed, 0xebeaee, 0xecebef, 0xeeedf0, 0xefeef1, 0xf1eff2, 0xf2f0f2, 0xf3f1f3,
    0xf5f2f4, 0xf6f3f4, 0xf7f4f4, 0xf8f4f5, 0xf9f5f5, 0xf9f5f5, 0xfaf5f5, 0xfaf5f5,
    0xfaf5f4, 0xfaf5f4, 0xfaf4f3, 0xfaf3f3, 0xfaf3f2, 0xfaf2f1, 0xfaf0ef, 0xf9efee,
    0xf9eeed, 0xf8edeb, 0xf7ebea, 0xf7eae8, 0xf6e8e7, 0xf5e7e5, 0xf5e5e4, 0xf4e3e2,
    0xf3e2e0, 0xf2e0df, 0xf2dfdd, 0xf1dddb, 0xf0dbda, 0xefdad8, 0xefd8d6, 0xeed7d5,
    0xedd5d3, 0xecd3d2, 0xecd2d0, 0xebd0ce, 0xeacfcd, 0xeacdcb, 0xe9cbc9, 0xe8cac8,
    0xe7c8c6, 0xe7c7c5, 0xe6c5c3, 0xe5c3c1, 0xe5c2c0, 0xe4c0be, 0xe3bfbd, 0xe3bdbb,
    0xe2bcb9, 0xe1bab8, 0xe1b9b6, 0xe0b7b5, 0xdfb5b3, 0xdfb4b2, 0xdeb2b0, 0xdeb1ae,
    0xddafad, 0xdcaeab, 0xdcacaa, 0xdbaba8, 0xdaa9a7, 0xdaa8a5, 0xd9a6a4, 0xd9a5a2,
    0xd8a3a0, 0xd7a29f, 0xd7a09d, 0xd69f9c, 0xd59d9a, 0xd59c99, 0xd49a97, 0xd49896,
    0xd39794, 0xd29593, 0xd29491, 0xd19290, 0xd1918e, 0xd08f8d, 0xcf8e8b, 0xcf8c8a,
    0xce8b88, 0xcd8987, 0xcd8885, 0xcc8784, 0xcc8582, 0xcb8481, 0xca827f, 0xca817e,
    0xc97f7d, 0xc87e7b, 0xc87c7a, 0xc77b78, 0xc77977, 0xc67875, 0xc57674, 0xc57572,
    0xc47371, 0xc3726f, 0xc3706e, 0xc26f6d, 0xc16d6b, 0xc16c6a, 0xc06a68, 0xc06967,
    0xbf6765, 0xbe6664, 0xbe6463, 0xbd6361, 0xbc6160, 0xbc605e, 0xbb5e5d, 0xba5d5c,
    0xb95b5a, 0xb95a59, 0xb85857, 0xb75756, 0xb75555, 0xb65453, 0xb55252, 0xb55151,
    0xb44f4f, 0xb34d4e, 0xb24c4c, 0xb24a4b, 0xb1494a, 0xb04748, 0xaf4647, 0xaf4446,
    0xae4244, 0xad4143, 0xac3f42, 0xac3e40, 0xab3c3f, 0xaa3a3e, 0xa9393c, 0xa9373b,
];

/// `icefire`, 256 entries.
pub(crate) const ICEFIRE: [u32; 256] = [
    0xbde7db, 0xbae5da, 0xb7e3d9, 0xb4e1d9, 0xb2dfd8, 0xafddd7, 0xacdbd7, 0xa9d9d6,
    0xa7d7d5, 0xa4d5d5, 0xa1d3d4, 0x9ed1d3, 0x9bcfd3, 0x98cdd2, 0x95cbd2, 0x93cad1,
    0x90c8d1, 0x8dc6d0, 0x8ac4d0, 0x87c2cf, 0x84c1cf, 0x81bfcf, 0x7ebdce, 0x7bbbce,
    0x78b9ce, 0x75b8ce, 0x72b6ce, 0x6eb4cd, 0x6bb2cd, 0x68b0cd, 0x65afcd, 0x63adcd,
    0x60abcd, 0x5da9cd, 0x5aa7cd, 0x58a5cd, 0x55a3cd, 0x53a2cd, 0x50a0cd, 0x4e9ecd,
    0x4c9ccd, 0x499ace, 0x4798ce, 0x4596ce, 0x4394ce, 0x4192ce, 0x3f90ce, 0x3e8ecf,
    0x3c8ccf, 0x3a89cf, 0x3987cf, 0x3885d0, 0x3783d0, 0x3781d0, 0x377fd0, 0x377cd0,
    0x377ad0, 0x3878cf, 0x3975cf, 0x3a73ce, 0x3b71cd, 0x3d6ecc, 0x3e6ccb, 0x3f69c9,
    0x4167c7, 0x4265c5, 0x4363c3, 0x4560c1, 0x465ebe, 0x475cbc, 0x475ab9, 0x4858b6,
    0x4956b3, 0x4954b0, 0x4952ad, 0x4a50a9, 0x4a4fa5, 0x494da1, 0x494c9e, 0x494a9a,
    0x484996, 0x474792, 0x47468e, 0x46458a, 0x454386, 0x444282, 0x43417f, 0x42407b,
    0x413e77, 0x3f3d74, 0x3e3c70, 0x3d3b6d, 0x3c3a69, 0x3b3866, 0x393763, 0x38365f,
    0x37355c, 0x363459, 0x343356, 0x333153, 0x323050, 0x312f4d, 0x302e4a, 0x2e2d48,
    0x2d2c45, 0x2c2b42, 0x2b2a40, 0x2a293d, 0x29283b, 0x282739, 0x272636, 0x262534,
    0x252532, 0x242430, 0x24232e, 0x23222d, 0x22222b, 0x222129, 0x212028, 0x212026,
    0x202025, 0x201f24, 0x1f1f23, 0x1f1f21, 0x1f1e21, 0x1f1e20, 0x1f1e1f, 0x1f1e1e,
    0x1f1e1e, 0x201e1e, 0x211e1e, 0x221e1e, 0x231e1e, 0x251e1f, 0x261e1f, 0x271e1f,
    0x291e20, 0x2a1e20, 0x2c1e21, 0x2d1f21, 0x2f1f22, 0x311f23, 0x332023, 0x352024,
    0x372025, 0x392126, 0x3b2127, 0x3d2228, 0x3f2228, 0x412329, 0x43232a, 0x46242b,
    0x48242c, 0x4a252e, 0x4d252f, 0x4f2630, 0x522731, 0x542732, 0x572833, 0x5a2834,
    0x5c2935, 0x5f2936, 0x622937, 0x642a38, 0x672a39, 0x6a2b3a, 0x6d2b3b, 0x702b3c,
    0x722c3d, 0x752c3e, 0x782c3f, 0x7b2d40, 0x7e2d40, 0x812d41, 0x842d42, 0x872d42,
    0x8a2e43, 0x8d2e43, 0x902e44, 0x932e44, 0x962e44, 0x992e44, 0x9c2f45, 0x9f2f44,
    0xa22f44, 0xa52f44, 0xa83044, 0xab3043, 0xae3143, 0xb13242, 0xb33341, 0xb63441,
    0xb93540, 0xbb363f, 0xbe373e, 0xc0393d, 0xc33a3c, 0xc53c3c, 0xc73d3b, 0xc93f3a,
    0xcc4139, 0xce4338, 0xd04537, 0xd24737, 0xd34936, 0xd54b35, 0xd74e35, 0xd95034,
    0xda5334, 0xdc5534, 0xde5733, 0xdf5a33, 0xe15c33, 0xe25f33, 0xe36233, 0xe56433,
    0xe66734, 0xe76a34, 0xe86d35, 0xe96f36, 0xea7238, 0xeb753a, 0xec783b, 0xed7b3e,
    0xed7e40, 0xee8142, 0xef8445, 0xef8748, 0xf0894b, 0xf18c4e, 0xf18f51, 0xf29255,
    0xf29558, 0xf3985b, 0xf39a5f, 0xf49d63, 0xf5a066, 0xf5a36a, 0xf6a56d, 0xf6a871,
    0xf7ab75, 0xf7ae79, 0xf8b07c, 0xf8b380, 0xf9b684, 0xfab887, 0xfabb8b, 0xfbbe8f,
    0xfbc192, 0xfcc396, 0xfcc69a, 0xfdc99e, 0xfdcca1, 0xfecea5, 0xfed1a9, 0xffd4ac,
];
