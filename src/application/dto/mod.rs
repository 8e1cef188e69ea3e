pub mod articles;
pub mod auth;
pub mod format;
pub mod media;
pub mod pagination;
pub mod resources;
pub mod timeline;

pub use articles::{
    AboutDto, AdminArticleListDto, ArticleDto, ArticleEditorDto, ArticleLinkDto, ArticleSummaryDto,
    ArticleViewDto, CategoryDto, CategoryPageDto, DashboardDto, HomeDto, SearchResultDto,
};
pub use auth::{AdminContext, AdminSession, LoginResult};
pub use media::{MediaDto, MediaLibraryDto, Notice, NoticeLevel, UploadedFile};
pub use pagination::PageDto;
pub use resources::{ResourceDto, ResourceGroupDto, ResourceGroupsDto, ResourceListDto};
pub use timeline::{TimelineDto, TimelineEntryDto};
