use std::str::FromStr;

use super::StoreError;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub xres: String,
    pub yres: String,
    pub diameter: String,
    pub xleft: String,
    pub ydown: String,
    pub vv: String,
    pub vh: String,
    pub target_res: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            xres: String::new(),
            yres: String::new(),
            diameter: String::new(),
            xleft: String::new(),
            ydown: String::new(),
            vv: String::new(),
            vh: String::new(),
            target_res: "1000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewField {
    Xres,
    Yres,
    Diameter,
    Xleft,
    Ydown,
    Vv,
    Vh,
    TargetRes,
}

impl FromStr for ViewField {
    type Err = StoreError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "xres" => Ok(ViewField::Xres),
            "yres" => Ok(ViewField::Yres),
            "diameter" => Ok(ViewField::Diameter),
            "xleft" => Ok(ViewField::Xleft),
            "ydown" => Ok(ViewField::Ydown),
            "vv" => Ok(ViewField::Vv),
            "vh" => Ok(ViewField::Vh),
            "targetRes" => Ok(ViewField::TargetRes),
            other => Err(StoreError::UnknownViewField(other.to_string())),
        }
    }
}

impl ViewSettings {
    pub fn get(&self, field: ViewField) -> &str {
        match field {
            ViewField::Xres => &self.xres,
            ViewField::Yres => &self.yres,
            ViewField::Diameter => &self.diameter,
            ViewField::Xleft => &self.xleft,
            ViewField::Ydown => &self.ydown,
            ViewField::Vv => &self.vv,
            ViewField::Vh => &self.vh,
            ViewField::TargetRes => &self.target_res,
        }
    }

    pub fn set(&mut self, field: ViewField, value: impl Into<String>) {
        let slot = match field {
            ViewField::Xres => &mut self.xres,
            ViewField::Yres => &mut self.yres,
            ViewField::Diameter => &mut self.diameter,
            ViewField::Xleft => &mut self.xleft,
            ViewField::Ydown => &mut self.ydown,
            ViewField::Vv => &mut self.vv,
            ViewField::Vh => &mut self.vh,
            ViewField::TargetRes => &mut self.target_res,
        };
        *slot = value.into();
    }

    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> super::Result<()> {
        self.set(name.parse::<ViewField>()?, value);
        Ok(())
    }
}
