//! Audio sessions on the default render endpoint.

use appmix_core::{
    AppmixError, AudioDevice, AudioSessionHandle, AudioSessionList, SessionOwner, SessionVolume,
};
use windows::Win32::Media::Audio::{
    IAudioSessionControl2, IAudioSessionEnumerator, IAudioSessionManager2, IMMDeviceEnumerator,
    ISimpleAudioVolume, MMDeviceEnumerator, eMultimedia, eRender,
};
use windows::Win32::System::Com::{CLSCTX_ALL, CoCreateInstance};
use windows::core::{HRESULT, Interface};

use crate::os_err;

/// Success code from `IAudioSessionControl2::GetProcessId` for a session that
/// is not bound to any process yet.
pub const AUDCLNT_S_NO_CURRENT_PROCESS: HRESULT = HRESULT(0x0889_000D);

/// The default multimedia render endpoint.
///
/// The endpoint is looked up when sessions are enumerated; the device
/// enumerator, device and session manager are released before `sessions`
/// returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRenderDevice;

impl AudioDevice for DefaultRenderDevice {
    type Sessions = WasapiSessionList;

    fn sessions(&self) -> Result<WasapiSessionList, AppmixError> {
        unsafe {
            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)
                    .map_err(os_err("CoCreateInstance(MMDeviceEnumerator)"))?;
            let device = enumerator
                .GetDefaultAudioEndpoint(eRender, eMultimedia)
                .map_err(os_err("GetDefaultAudioEndpoint"))?;
            let manager: IAudioSessionManager2 = device
                .Activate(CLSCTX_ALL, None)
                .map_err(os_err("IMMDevice::Activate(IAudioSessionManager2)"))?;
            let enumerator = manager
                .GetSessionEnumerator()
                .map_err(os_err("GetSessionEnumerator"))?;
            Ok(WasapiSessionList { enumerator })
        }
    }
}

pub struct WasapiSessionList {
    enumerator: IAudioSessionEnumerator,
}

impl AudioSessionList for WasapiSessionList {
    type Session = WasapiSession;

    fn count(&self) -> Result<usize, AppmixError> {
        let count = unsafe { self.enumerator.GetCount() }.map_err(os_err("GetCount"))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn session(&self, index: usize) -> Result<WasapiSession, AppmixError> {
        let index = i32::try_from(index)
            .map_err(|_| AppmixError::os_api("GetSession", format!("index {index} out of range")))?;
        let control = unsafe { self.enumerator.GetSession(index) }.map_err(os_err("GetSession"))?;
        // `control` is released at the end of this call; only the extended
        // interface is kept.
        let control = control
            .cast::<IAudioSessionControl2>()
            .map_err(os_err("QueryInterface(IAudioSessionControl2)"))?;
        Ok(WasapiSession { control })
    }
}

pub struct WasapiSession {
    control: IAudioSessionControl2,
}

impl AudioSessionHandle for WasapiSession {
    type Volume = WasapiVolume;

    fn owner(&self) -> SessionOwner {
        // The generated `GetProcessId` wrapper folds success codes into `Ok`,
        // so call through the vtable to see AUDCLNT_S_NO_CURRENT_PROCESS.
        let mut pid = 0u32;
        let hr = unsafe {
            (Interface::vtable(&self.control).GetProcessId)(
                Interface::as_raw(&self.control),
                &mut pid,
            )
        };
        if hr == AUDCLNT_S_NO_CURRENT_PROCESS {
            SessionOwner::NoCurrentProcess
        } else if hr.is_err() {
            SessionOwner::Unresolved(format!("{hr:?}: {}", hr.message()))
        } else {
            SessionOwner::Process(pid)
        }
    }

    fn volume(&self) -> Result<WasapiVolume, AppmixError> {
        self.control
            .cast::<ISimpleAudioVolume>()
            .map(|volume| WasapiVolume { volume })
            .map_err(os_err("QueryInterface(ISimpleAudioVolume)"))
    }
}

/// Per-session `ISimpleAudioVolume`, released on drop.
pub struct WasapiVolume {
    volume: ISimpleAudioVolume,
}

impl SessionVolume for WasapiVolume {
    fn level(&self) -> Result<f32, AppmixError> {
        unsafe { self.volume.GetMasterVolume() }.map_err(os_err("GetMasterVolume"))
    }

    fn set_level(&self, level: f32) -> Result<(), AppmixError> {
        unsafe { self.volume.SetMasterVolume(level, std::ptr::null()) }
            .map_err(os_err("SetMasterVolume"))
    }
}
