mod fetch_user;
mod login_user;
mod register_user;

pub use fetch_user::{
    __path_get_user_profile_handler, get_user_profile_handler, UserProfileResponse,
};
pub use login_user::{
    __path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo,
};
pub use register_user::{
    __path_register_user_handler, register_user_handler, CreateUserRequest, RegisterUserResponse,
    RegisteredUser,
};
