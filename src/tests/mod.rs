//! 单元测试模块
//! 覆盖时间格式、倒计时状态机、调度、输入框、拖动、小组件、渲染与配置

pub mod countdown_tests;
pub mod render_tests;
pub mod config_tests;
