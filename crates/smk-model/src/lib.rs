pub mod bundle;
pub mod dto;
pub mod enums;
pub mod error;
pub mod ids;
pub mod procedure;
pub mod records;
pub mod specialization;
pub mod summary;

pub use bundle::{DataBundle, OwnershipContext};
pub use dto::{
    AxisProgress, DashboardCourseProgress, DashboardInternshipProgress, DashboardModuleProgress,
    DashboardOverviewDto, DashboardProcedureProgress, DashboardShiftProgress, ExportStatus,
    ImportantDateDto, ImportantDateKind, ModuleProcedureSummary, ModuleProceduresDto,
    ModuleProgressDto, ModuleValidationInfo, ProcedureProgressDto, SmkExportPreviewDto,
    SmkValidationResultDto, SpecializationInfoDto, SpecializationStatisticsDto,
    UserProcedureSummary, UserProceduresDto,
};
pub use enums::{
    AbsenceType, ModuleType, ProcedureRole, PublicationType, RecognitionType, SelfEducationType,
    SmkVersion,
};
pub use error::{Result, SmkError};
pub use ids::{
    AbsenceId, CourseId, InternshipId, ModuleId, ProcedureId, PublicationId, RecognitionId,
    SelfEducationId, ShiftId, SpecializationId, UserId,
};
pub use procedure::{NewSmkProcedure, OldSmkProcedure, ProcedureRealization, ProcedureRecord};
pub use records::{
    Absence, AdditionalSelfEducationDays, Course, Internship, MedicalShift, Publication,
    Recognition, SelfEducation,
};
pub use specialization::{Module, Specialization, add_days, sub_days};
pub use summary::{
    AbsenceSummary, AbsenceTypeDays, CourseSummary, InternshipSummary, ModuleInternships,
    PeriodHours, PublicationSummary, RecognitionSummary, SelfEducationSummary, ShiftSummary,
    TrainingYearHours, YearCount, YearDays,
};
