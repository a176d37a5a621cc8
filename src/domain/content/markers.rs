//! Delimiter grammar shared by the prompt and the response parser

pub const OBJECTIVES_BEGIN: &str = "===BAT_DAU_MUC_TIEU===";
pub const OBJECTIVES_END: &str = "===KET_THUC_MUC_TIEU===";

pub const MATERIALS_BEGIN: &str = "===BAT_DAU_HOC_LIEU===";
pub const MATERIALS_END: &str = "===KET_THUC_HOC_LIEU===";

pub const ACTIVITIES_BEGIN: &str = "===BAT_DAU_HOAT_DONG===";
pub const ACTIVITIES_END: &str = "===KET_THUC_HOAT_DONG===";

pub const APPENDIX_BEGIN: &str = "===BAT_DAU_PHU_LUC===";
pub const APPENDIX_END: &str = "===KET_THUC_PHU_LUC===";

/// Separates activity records inside the activities section
pub const ACTIVITY_SEPARATOR: &str = "---PHAN_CACH_HOAT_DONG---";

pub const ANCHOR_FIELD: &str = "ANCHOR:";
pub const CONTENT_FIELD: &str = "CONTENT:";
